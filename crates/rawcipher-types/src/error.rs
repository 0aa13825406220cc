/// Raw cipher errors.
///
/// Every variant is a caller-input error scoped to the failing call; none of
/// them invalidates an already constructed context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("invalid cipher type: {0}")]
    UnknownAlgorithm(String),
    #[error("invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },
    #[error("invalid iv length: expected {expected}, got {got}")]
    InvalidIvLength { expected: usize, got: usize },
    #[error("input length {len} is not a multiple of block size {block_size}")]
    UnalignedInput { len: usize, block_size: usize },
    #[error("output length {output} does not match input length {input}")]
    LengthMismatch { output: usize, input: usize },
    #[error("backend initialization failed: {0}")]
    BackendInit(String),
}
