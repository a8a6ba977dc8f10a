//! Tag values of the X Protocol notice messages (`mysqlx_notice.proto`, `mysqlx_datatypes.proto`)

/// `Mysqlx.Notice.Frame.type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameType {
    Warning,
    SessionVariableChanged,
    SessionStateChanged,
    GroupReplicationStateChanged,
    ServerHello,
    Unknown(u32),
}

impl From<u32> for FrameType {
    fn from(value: u32) -> Self {
        match value {
            1 => Self::Warning,
            2 => Self::SessionVariableChanged,
            3 => Self::SessionStateChanged,
            4 => Self::GroupReplicationStateChanged,
            5 => Self::ServerHello,
            other => Self::Unknown(other),
        }
    }
}

impl From<FrameType> for u32 {
    fn from(value: FrameType) -> Self {
        match value {
            FrameType::Warning => 1,
            FrameType::SessionVariableChanged => 2,
            FrameType::SessionStateChanged => 3,
            FrameType::GroupReplicationStateChanged => 4,
            FrameType::ServerHello => 5,
            FrameType::Unknown(other) => other,
        }
    }
}

/// `Mysqlx.Notice.Frame.scope`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameScope {
    #[default]
    Global,
    Local,
    Unknown(u32),
}

impl From<u32> for FrameScope {
    fn from(value: u32) -> Self {
        match value {
            1 => Self::Global,
            2 => Self::Local,
            other => Self::Unknown(other),
        }
    }
}

/// `Mysqlx.Notice.SessionStateChanged.Parameter`
///
/// `Unknown` carries tags introduced by newer servers so they stay visible instead of being
/// folded into one of the known parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStateParam {
    CurrentSchema,
    AccountExpired,
    GeneratedInsertId,
    RowsAffected,
    RowsFound,
    RowsMatched,
    TrxCommitted,
    TrxRolledback,
    ProducedMessage,
    ClientIdAssigned,
    GeneratedDocumentIds,
    Unknown(u32),
}

impl From<u32> for SessionStateParam {
    fn from(value: u32) -> Self {
        match value {
            1 => Self::CurrentSchema,
            2 => Self::AccountExpired,
            3 => Self::GeneratedInsertId,
            4 => Self::RowsAffected,
            5 => Self::RowsFound,
            6 => Self::RowsMatched,
            7 => Self::TrxCommitted,
            // 8 is unassigned in mysqlx_notice.proto
            9 => Self::TrxRolledback,
            10 => Self::ProducedMessage,
            11 => Self::ClientIdAssigned,
            12 => Self::GeneratedDocumentIds,
            other => Self::Unknown(other),
        }
    }
}

impl From<SessionStateParam> for u32 {
    fn from(value: SessionStateParam) -> Self {
        match value {
            SessionStateParam::CurrentSchema => 1,
            SessionStateParam::AccountExpired => 2,
            SessionStateParam::GeneratedInsertId => 3,
            SessionStateParam::RowsAffected => 4,
            SessionStateParam::RowsFound => 5,
            SessionStateParam::RowsMatched => 6,
            SessionStateParam::TrxCommitted => 7,
            SessionStateParam::TrxRolledback => 9,
            SessionStateParam::ProducedMessage => 10,
            SessionStateParam::ClientIdAssigned => 11,
            SessionStateParam::GeneratedDocumentIds => 12,
            SessionStateParam::Unknown(other) => other,
        }
    }
}

/// `Mysqlx.Notice.Warning.Level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarningLevel {
    Note,
    #[default]
    Warning,
    Error,
    Unknown(u32),
}

impl From<u32> for WarningLevel {
    fn from(value: u32) -> Self {
        match value {
            1 => Self::Note,
            2 => Self::Warning,
            3 => Self::Error,
            other => Self::Unknown(other),
        }
    }
}

/// `Mysqlx.Datatypes.Scalar.Type`
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    SignedInt = 1,
    UnsignedInt = 2,
    Null = 3,
    Octets = 4,
    Double = 5,
    Float = 6,
    Bool = 7,
    String = 8,
}

impl ScalarType {
    pub fn from_tag(tag: u64) -> Option<Self> {
        match tag {
            1 => Some(Self::SignedInt),
            2 => Some(Self::UnsignedInt),
            3 => Some(Self::Null),
            4 => Some(Self::Octets),
            5 => Some(Self::Double),
            6 => Some(Self::Float),
            7 => Some(Self::Bool),
            8 => Some(Self::String),
            _ => None,
        }
    }
}

/// Protobuf wire types
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    Fixed32 = 5,
}
