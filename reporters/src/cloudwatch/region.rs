use std::fmt;

/// Known AWS region identifiers.
///
/// Parsing is an exact match against the identifier list; an unknown
/// identifier resolves to `None` rather than an error, leaving region
/// selection to the SDK's own providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    UsEast1,
    UsEast2,
    UsWest1,
    UsWest2,
    AfSouth1,
    ApEast1,
    ApSouth1,
    ApSouth2,
    ApSoutheast1,
    ApSoutheast2,
    ApSoutheast3,
    ApSoutheast4,
    ApNortheast1,
    ApNortheast2,
    ApNortheast3,
    CaCentral1,
    CaWest1,
    EuCentral1,
    EuCentral2,
    EuWest1,
    EuWest2,
    EuWest3,
    EuNorth1,
    EuSouth1,
    EuSouth2,
    IlCentral1,
    MeCentral1,
    MeSouth1,
    SaEast1,
    UsGovEast1,
    UsGovWest1,
    CnNorth1,
    CnNorthwest1,
}

impl Region {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "us-east-1" => Some(Region::UsEast1),
            "us-east-2" => Some(Region::UsEast2),
            "us-west-1" => Some(Region::UsWest1),
            "us-west-2" => Some(Region::UsWest2),
            "af-south-1" => Some(Region::AfSouth1),
            "ap-east-1" => Some(Region::ApEast1),
            "ap-south-1" => Some(Region::ApSouth1),
            "ap-south-2" => Some(Region::ApSouth2),
            "ap-southeast-1" => Some(Region::ApSoutheast1),
            "ap-southeast-2" => Some(Region::ApSoutheast2),
            "ap-southeast-3" => Some(Region::ApSoutheast3),
            "ap-southeast-4" => Some(Region::ApSoutheast4),
            "ap-northeast-1" => Some(Region::ApNortheast1),
            "ap-northeast-2" => Some(Region::ApNortheast2),
            "ap-northeast-3" => Some(Region::ApNortheast3),
            "ca-central-1" => Some(Region::CaCentral1),
            "ca-west-1" => Some(Region::CaWest1),
            "eu-central-1" => Some(Region::EuCentral1),
            "eu-central-2" => Some(Region::EuCentral2),
            "eu-west-1" => Some(Region::EuWest1),
            "eu-west-2" => Some(Region::EuWest2),
            "eu-west-3" => Some(Region::EuWest3),
            "eu-north-1" => Some(Region::EuNorth1),
            "eu-south-1" => Some(Region::EuSouth1),
            "eu-south-2" => Some(Region::EuSouth2),
            "il-central-1" => Some(Region::IlCentral1),
            "me-central-1" => Some(Region::MeCentral1),
            "me-south-1" => Some(Region::MeSouth1),
            "sa-east-1" => Some(Region::SaEast1),
            "us-gov-east-1" => Some(Region::UsGovEast1),
            "us-gov-west-1" => Some(Region::UsGovWest1),
            "cn-north-1" => Some(Region::CnNorth1),
            "cn-northwest-1" => Some(Region::CnNorthwest1),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::UsEast1 => "us-east-1",
            Region::UsEast2 => "us-east-2",
            Region::UsWest1 => "us-west-1",
            Region::UsWest2 => "us-west-2",
            Region::AfSouth1 => "af-south-1",
            Region::ApEast1 => "ap-east-1",
            Region::ApSouth1 => "ap-south-1",
            Region::ApSouth2 => "ap-south-2",
            Region::ApSoutheast1 => "ap-southeast-1",
            Region::ApSoutheast2 => "ap-southeast-2",
            Region::ApSoutheast3 => "ap-southeast-3",
            Region::ApSoutheast4 => "ap-southeast-4",
            Region::ApNortheast1 => "ap-northeast-1",
            Region::ApNortheast2 => "ap-northeast-2",
            Region::ApNortheast3 => "ap-northeast-3",
            Region::CaCentral1 => "ca-central-1",
            Region::CaWest1 => "ca-west-1",
            Region::EuCentral1 => "eu-central-1",
            Region::EuCentral2 => "eu-central-2",
            Region::EuWest1 => "eu-west-1",
            Region::EuWest2 => "eu-west-2",
            Region::EuWest3 => "eu-west-3",
            Region::EuNorth1 => "eu-north-1",
            Region::EuSouth1 => "eu-south-1",
            Region::EuSouth2 => "eu-south-2",
            Region::IlCentral1 => "il-central-1",
            Region::MeCentral1 => "me-central-1",
            Region::MeSouth1 => "me-south-1",
            Region::SaEast1 => "sa-east-1",
            Region::UsGovEast1 => "us-gov-east-1",
            Region::UsGovWest1 => "us-gov-west-1",
            Region::CnNorth1 => "cn-north-1",
            Region::CnNorthwest1 => "cn-northwest-1",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
