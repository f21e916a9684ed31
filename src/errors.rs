use thiserror::Error;

#[derive(Error, Debug)]
pub enum Errors {
    #[error("Special opcode {op} out of range max is {max}")]
    OpcodeOutOfRange {
        op: i16,
        max: usize,
    },

    #[error("Unimplemented special opcode {op} ({op:#X})")]
    UnimplementedOpcode {
        op: i16,
    },

    #[error("INI record {id} does not exist")]
    IniRecordMissing {
        id: u16,
    },

    #[error("No flicker record is set")]
    FlickerRecordMissing,

    #[error("INI record {ini} has no actor")]
    ActorMissing {
        ini: u16,
    },

    #[error("Cannot load config {path} error: {error}")]
    ConfigLoadFailed {
        path: String,
        error: serde_yaml::Error,
    },

    #[error("Engine worker thread panicked")]
    WorkerPanicked,
}
