use crate::error::ContractError;
use crate::event;
use crate::non_fungible::NonFungibleTokenClient;
use crate::storage_types::DataKey;
use crate::types::{Role, WithdrawalAsset, WithdrawalRequest};
use crate::{open_set, requests, roles};
use multi_signed_messages::MultiSignedMessagesClient;
use soroban_sdk::{contract, contractimpl, log, token, Address, Bytes, Env, Vec};
use soroban_vault_std::ensure;
use soroban_vault_std::ttl::extend_instance_ttl;

#[contract]
pub struct Vault;

#[contractimpl]
impl Vault {
    /// Sets up a vault the way the factory deploys it: `admin` is granted [`Role::Admin`] and the vote
    /// threshold and withdrawal delay are taken as given.
    pub fn __constructor(
        env: Env,
        admin: Address,
        signature_manager: Address,
        native_token: Address,
        required_vote_count: u32,
        withdrawal_delay_seconds: u64,
    ) {
        roles::grant_role(&env, Role::Admin, &admin);

        env.storage()
            .instance()
            .set(&DataKey::SignatureManager, &signature_manager);
        env.storage()
            .instance()
            .set(&DataKey::NativeToken, &native_token);
        env.storage()
            .instance()
            .set(&DataKey::RequiredVoteCount, &required_vote_count);
        env.storage()
            .instance()
            .set(&DataKey::WithdrawalDelaySeconds, &withdrawal_delay_seconds);
    }

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        roles::has_role(&env, role, &account)
    }

    /// Grant `role` to `account`.
    ///
    /// Only callable by an admin. Granting a role the account already holds is a no-op.
    pub fn grant_role(
        env: Env,
        admin: Address,
        role: Role,
        account: Address,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        roles::require_role(&env, Role::Admin, &admin)?;

        if roles::grant_role(&env, role, &account) {
            event::role_granted(&env, role, account);
        }

        extend_instance_ttl(&env);

        Ok(())
    }

    /// Revoke `role` from `account`.
    ///
    /// Only callable by an admin. Revoking a role the account does not hold is a no-op.
    pub fn revoke_role(
        env: Env,
        admin: Address,
        role: Role,
        account: Address,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        roles::require_role(&env, Role::Admin, &admin)?;

        if roles::revoke_role(&env, role, &account) {
            event::role_revoked(&env, role, account);
        }

        extend_instance_ttl(&env);

        Ok(())
    }

    pub fn add_voter(env: Env, admin: Address, account: Address) -> Result<(), ContractError> {
        Self::grant_role(env, admin, Role::Voter, account)
    }

    pub fn remove_voter(env: Env, admin: Address, account: Address) -> Result<(), ContractError> {
        Self::revoke_role(env, admin, Role::Voter, account)
    }

    pub fn required_vote_count(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::RequiredVoteCount)
            .expect("required vote count must be set during contract construction")
    }

    pub fn withdrawal_delay_seconds(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::WithdrawalDelaySeconds)
            .expect("withdrawal delay must be set during contract construction")
    }

    pub fn signature_manager(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::SignatureManager)
            .expect("signature manager must be set during contract construction")
    }

    pub fn native_token(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::NativeToken)
            .expect("native token must be set during contract construction")
    }

    /// Only callable by an admin.
    pub fn update_required_vote_count(
        env: Env,
        admin: Address,
        required_vote_count: u32,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        roles::require_role(&env, Role::Admin, &admin)?;

        env.storage()
            .instance()
            .set(&DataKey::RequiredVoteCount, &required_vote_count);

        extend_instance_ttl(&env);

        event::required_vote_count_updated(&env, required_vote_count);
        Ok(())
    }

    /// Only callable by an admin.
    pub fn update_withdrawal_delay_seconds(
        env: Env,
        admin: Address,
        withdrawal_delay_seconds: u64,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        roles::require_role(&env, Role::Admin, &admin)?;

        env.storage()
            .instance()
            .set(&DataKey::WithdrawalDelaySeconds, &withdrawal_delay_seconds);

        extend_instance_ttl(&env);

        event::withdrawal_delay_updated(&env, withdrawal_delay_seconds);
        Ok(())
    }

    /// Swap the registry that tallies message approvals for this vault.
    ///
    /// Only callable by an admin.
    pub fn update_signature_manager(
        env: Env,
        admin: Address,
        signature_manager: Address,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        roles::require_role(&env, Role::Admin, &admin)?;

        env.storage()
            .instance()
            .set(&DataKey::SignatureManager, &signature_manager);

        extend_instance_ttl(&env);

        event::signature_manager_updated(&env, signature_manager);
        Ok(())
    }

    /// Deposit `amount` of the native asset from `from` into the vault.
    ///
    /// Fungible tokens need no dedicated entry point, any transfer to the vault's address is held by it.
    pub fn receive_native_currency(
        env: Env,
        from: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        from.require_auth();

        ensure!(amount > 0, ContractError::InvalidAmount);

        token::Client::new(&env, &Self::native_token(&env)).transfer(
            &from,
            &env.current_contract_address(),
            &amount,
        );

        extend_instance_ttl(&env);

        event::native_received(&env, from, amount);
        Ok(())
    }

    pub fn native_balance(env: Env) -> i128 {
        token::Client::new(&env, &Self::native_token(&env)).balance(&env.current_contract_address())
    }

    pub fn token_balance(env: Env, token: Address) -> i128 {
        token::Client::new(&env, &token).balance(&env.current_contract_address())
    }

    /// Open a new withdrawal request and return its id.
    ///
    /// Only callable by a voter. The request starts without votes and its timelock anchored at the
    /// current ledger time.
    pub fn create_withdrawal_request(
        env: Env,
        voter: Address,
        asset: WithdrawalAsset,
        recipient: Address,
        amount: i128,
    ) -> Result<u64, ContractError> {
        voter.require_auth();
        roles::require_role(&env, Role::Voter, &voter)?;

        ensure!(amount > 0, ContractError::InvalidAmount);

        let now = env.ledger().timestamp();
        let id = requests::next_id(&env);

        let request = WithdrawalRequest {
            asset: asset.clone(),
            creator: voter.clone(),
            recipient: recipient.clone(),
            amount,
            created_at: now,
            latest_approve_vote_time: now,
            approve_vote_count: 0,
            voted_voters: Vec::new(&env),
        };

        requests::save(&env, id, &request);
        open_set::insert(&env, id);

        extend_instance_ttl(&env);

        log!(&env, "withdrawal request created", id);

        event::withdrawal_request_created(&env, id, voter, recipient, asset, amount);
        Ok(id)
    }

    /// Cast the voter's single vote on an open request.
    ///
    /// Votes are final. An approving vote restarts the timelock from the current ledger time, a rejecting
    /// vote only uses up the voter's vote.
    pub fn vote_on_withdrawal_request(
        env: Env,
        voter: Address,
        id: u64,
        approve: bool,
    ) -> Result<(), ContractError> {
        voter.require_auth();
        roles::require_role(&env, Role::Voter, &voter)?;

        let mut request = requests::load_open(&env, id)?;

        ensure!(
            !request.voted_voters.contains(&voter),
            ContractError::AlreadyVoted
        );

        request.voted_voters.push_back(voter.clone());

        if approve {
            request.approve_vote_count += 1;
            request.latest_approve_vote_time = env.ledger().timestamp();
        }

        requests::save(&env, id, &request);

        extend_instance_ttl(&env);

        event::withdrawal_request_voted(&env, id, voter, approve, request.approve_vote_count);
        Ok(())
    }

    /// Release the funds of an open request to its recipient.
    ///
    /// Only callable by a voter, once the request has enough approving votes and the withdrawal delay has
    /// passed since the latest approving vote. If the transfer fails the request stays open.
    pub fn process_withdrawal_request(
        env: Env,
        voter: Address,
        id: u64,
    ) -> Result<(), ContractError> {
        voter.require_auth();
        roles::require_role(&env, Role::Voter, &voter)?;

        let request = requests::load_open(&env, id)?;

        ensure!(
            request.approve_vote_count >= Self::required_vote_count(&env),
            ContractError::InsufficientVotes
        );

        let unlocks_at = request
            .latest_approve_vote_time
            .saturating_add(Self::withdrawal_delay_seconds(&env));

        ensure!(
            env.ledger().timestamp() >= unlocks_at,
            ContractError::TimelockNotElapsed
        );

        Self::transfer_asset(&env, &request)?;

        open_set::remove(&env, id);

        extend_instance_ttl(&env);

        log!(&env, "withdrawal request processed", id);

        event::withdrawal_request_processed(&env, id, voter);
        Ok(())
    }

    /// Close an open request without releasing any funds. The record is kept.
    ///
    /// Only callable by an admin.
    pub fn delete_withdrawal_request(
        env: Env,
        admin: Address,
        id: u64,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        roles::require_role(&env, Role::Admin, &admin)?;

        ensure!(open_set::remove(&env, id), ContractError::NotFound);

        extend_instance_ttl(&env);

        log!(&env, "withdrawal request deleted", id);

        event::withdrawal_request_deleted(&env, id, admin);
        Ok(())
    }

    /// Shift the timelock anchor of an open request forward (`increase`) or backward by `delta_seconds`.
    ///
    /// Only callable by an admin. The anchor is not bounded by the creation time, it only saturates at the
    /// limits of the timestamp range.
    pub fn update_approve_vote_time(
        env: Env,
        admin: Address,
        id: u64,
        increase: bool,
        delta_seconds: u64,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        roles::require_role(&env, Role::Admin, &admin)?;

        let mut request = requests::load_open(&env, id)?;

        request.latest_approve_vote_time = if increase {
            request.latest_approve_vote_time.saturating_add(delta_seconds)
        } else {
            request.latest_approve_vote_time.saturating_sub(delta_seconds)
        };

        requests::save(&env, id, &request);

        extend_instance_ttl(&env);

        event::approve_vote_time_updated(&env, id, request.latest_approve_vote_time);
        Ok(())
    }

    /// Returns the request with the given id, whether it is still open or not.
    pub fn withdrawal_request(env: Env, id: u64) -> Result<WithdrawalRequest, ContractError> {
        requests::load(&env, id).ok_or(ContractError::NotFound)
    }

    /// Returns the ids of all open requests. The order is unspecified.
    pub fn open_withdrawal_request_ids(env: Env) -> Vec<u64> {
        open_set::ids(&env)
    }

    /// Approve `message` on behalf of `voter`, returning the number of distinct approvals it has within this vault.
    ///
    /// Only callable by a voter. Approving the same message twice does not count twice.
    pub fn sign_message(env: Env, voter: Address, message: Bytes) -> Result<u32, ContractError> {
        voter.require_auth();
        roles::require_role(&env, Role::Voter, &voter)?;

        let approvals = MultiSignedMessagesClient::new(&env, &Self::signature_manager(&env))
            .register_approval(&env.current_contract_address(), &voter, &message);

        extend_instance_ttl(&env);

        Ok(approvals)
    }
}

impl Vault {
    fn transfer_asset(env: &Env, request: &WithdrawalRequest) -> Result<(), ContractError> {
        let vault = env.current_contract_address();

        let transferred = match &request.asset {
            WithdrawalAsset::NativeCurrency => token::Client::new(env, &Self::native_token(env))
                .try_transfer(&vault, &request.recipient, &request.amount)
                .is_ok_and(|res| res.is_ok()),
            WithdrawalAsset::FungibleToken(token) => token::Client::new(env, token)
                .try_transfer(&vault, &request.recipient, &request.amount)
                .is_ok_and(|res| res.is_ok()),
            WithdrawalAsset::NonFungibleToken(token, token_id) => {
                NonFungibleTokenClient::new(env, token)
                    .try_transfer(&vault, &request.recipient, token_id)
                    .is_ok_and(|res| res.is_ok())
            }
        };

        ensure!(transferred, ContractError::TransferFailed);

        Ok(())
    }
}
