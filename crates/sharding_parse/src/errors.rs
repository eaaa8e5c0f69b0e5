use crate::segment::SegmentKind;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Sharding rule not set for filler '{0}'")]
    MissingShardingRule(&'static str),

    #[error("Filler already registered for segment kind '{0}'")]
    DuplicateFiller(SegmentKind),
}

pub type Result<T, E = ParseError> = std::result::Result<T, E>;
