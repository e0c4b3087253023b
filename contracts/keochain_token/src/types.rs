use soroban_sdk::{contracterror, contracttype, String};

// ============================================================================
// ERROS DO CONTRATO
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum KeoError {
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Caller sem o papel exigido (owner/whitelist)
    Unauthorized = 3,

    // Negado pelo gate de pausa / trava de transferência
    TransferNotAllowed = 4,

    InsufficientBalance = 5,
    InsufficientAllowance = 6,

    // Amount negativo, listas de tamanhos diferentes no bulk_transfer
    InvalidArgument = 7,

    // pause() já pausado, unpause() já despausado
    InvalidState = 8,

    Overflow = 9,

    // Entrada chamada com o guard de reentrância travado
    Reentrant = 10,
}

// ============================================================================
// METADADOS DO TOKEN
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}
