use std::fmt;

/// Main error type for the creature-clash battle engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Error related to catalog lookup or loading
    Catalog(CatalogError),
    /// Error related to invalid battle state
    BattleState(BattleStateError),
}

/// Errors related to catalog operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The specified move id was not found in the catalog
    MoveNotFound(String),
    /// The specified creature definition id was not found in the catalog
    DefinitionNotFound(String),
    /// A catalog file could not be read
    Io(String),
    /// A catalog file could not be parsed
    Parse(String),
}

/// Errors related to battle state validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleStateError {
    /// No active creature found when one was expected
    NoActiveCreature,
    /// Invalid side index
    InvalidSideIndex(usize),
    /// Battle state is in an inconsistent or corrupted state
    InconsistentState(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Catalog(err) => write!(f, "Catalog error: {}", err),
            EngineError::BattleState(err) => write!(f, "Battle state error: {}", err),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::MoveNotFound(id) => write!(f, "Move not found: {}", id),
            CatalogError::DefinitionNotFound(id) => {
                write!(f, "Creature definition not found: {}", id)
            }
            CatalogError::Io(details) => write!(f, "Failed to read catalog data: {}", details),
            CatalogError::Parse(details) => write!(f, "Malformed catalog data: {}", details),
        }
    }
}

impl fmt::Display for BattleStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleStateError::NoActiveCreature => write!(f, "No active creature found"),
            BattleStateError::InvalidSideIndex(index) => {
                write!(f, "Invalid side index: {}", index)
            }
            BattleStateError::InconsistentState(details) => {
                write!(f, "Inconsistent battle state: {}", details)
            }
        }
    }
}

impl std::error::Error for EngineError {}
impl std::error::Error for CatalogError {}
impl std::error::Error for BattleStateError {}

impl From<CatalogError> for EngineError {
    fn from(err: CatalogError) -> Self {
        EngineError::Catalog(err)
    }
}

impl From<BattleStateError> for EngineError {
    fn from(err: BattleStateError) -> Self {
        EngineError::BattleState(err)
    }
}

/// Type alias for Results using EngineError
pub type BattleResult<T> = Result<T, EngineError>;

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;
