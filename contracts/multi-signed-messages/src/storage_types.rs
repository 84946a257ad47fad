use soroban_sdk::{contracttype, Address, BytesN};

#[contracttype]
#[derive(Clone, Debug)]
pub struct ApprovalKey {
    pub scope: Address,
    pub digest: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Approvals(ApprovalKey),
    Approved(ApprovalKey, Address),
}
