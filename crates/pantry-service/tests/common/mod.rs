//! In-memory repository doubles for service tests
//!
//! One store implements every repository trait and enforces the same
//! uniqueness and reference rules as the Postgres schema.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use pantry_core::{
    DomainError, IdRetryPolicy, Item, ItemRepository, LowStockQuery, NewItem, NewTransaction,
    NewUser, NewVendor, ProductTakeCount, RepoResult, StatusCount, Transaction,
    TransactionDetail, TransactionRepository, User, UserRepository, UserRole, UserUpdate, Vendor,
    VendorDeletion, VendorRepository,
};
use pantry_service::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    users: BTreeMap<String, User>,
    vendors: BTreeMap<i64, Vendor>,
    items: BTreeMap<i64, Item>,
    transactions: Vec<Transaction>,
    next_id: i64,
    /// Number of upcoming user inserts to reject as ID collisions
    forced_id_collisions: usize,
    /// User-id inserts seen, in order
    attempted_user_ids: Vec<String>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn detail(&self, t: &Transaction) -> TransactionDetail {
        let item = self.items.get(&t.product_id);
        TransactionDetail {
            transaction_id: t.transaction_id,
            user_id: t.user_id.clone(),
            product_id: t.product_id,
            quantity_taken: t.quantity_taken,
            user_status: Some(t.user_status.as_str().to_string()),
            taken_at: t.taken_at,
            product_name: item.map(|i| i.product_name.clone()).unwrap_or_default(),
            item_type: item.map(|i| i.item_type.clone()).unwrap_or_default(),
            username: self.users.get(&t.user_id).map(User::full_name),
        }
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a service context whose repositories all point at this store
    pub fn context(&self) -> ServiceContext {
        self.context_with_policy(IdRetryPolicy::default())
    }

    pub fn context_with_policy(&self, policy: IdRetryPolicy) -> ServiceContext {
        ServiceContextBuilder::new()
            .user_repo(Arc::new(self.clone()))
            .item_repo(Arc::new(self.clone()))
            .vendor_repo(Arc::new(self.clone()))
            .transaction_repo(Arc::new(self.clone()))
            .id_retry_policy(policy)
            .build()
            .unwrap()
    }

    /// Reject the next `n` user inserts as user-ID collisions
    pub fn force_id_collisions(&self, n: usize) {
        self.state.lock().unwrap().forced_id_collisions = n;
    }

    pub fn attempted_user_ids(&self) -> Vec<String> {
        self.state.lock().unwrap().attempted_user_ids.clone()
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.state.lock().unwrap().transactions.clone()
    }

    /// Seed a user with a raw stored status
    pub fn seed_user(&self, user_id: &str, status: Option<&str>) -> User {
        let user = User {
            user_id: user_id.to_string(),
            first_name: "Test".to_string(),
            last_name: user_id.to_string(),
            email: format!("{}@example.edu", user_id.to_lowercase()),
            status: status.map(String::from),
            role: UserRole::User,
            created_at: Utc::now(),
        };
        self.state
            .lock()
            .unwrap()
            .users
            .insert(user.user_id.clone(), user.clone());
        user
    }

    pub fn seed_vendor(&self, name: &str) -> Vendor {
        let mut state = self.state.lock().unwrap();
        let vendor = Vendor {
            vendor_id: state.next_id(),
            vendor_name: name.to_string(),
            contact_person: None,
            address: None,
            phone: None,
            email: None,
        };
        state.vendors.insert(vendor.vendor_id, vendor.clone());
        vendor
    }

    pub fn seed_item(&self, vendor_id: i64, name: &str, quantity: Option<i32>) -> Item {
        let mut state = self.state.lock().unwrap();
        let item = Item {
            product_id: state.next_id(),
            product_name: name.to_string(),
            item_type: "canned".to_string(),
            vendor_id,
            quantity,
            weight: None,
        };
        state.items.insert(item.product_id, item.clone());
        item
    }

    /// Remove a user behind the services' back
    pub fn remove_user(&self, user_id: &str) {
        self.state.lock().unwrap().users.remove(user_id);
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, user_id: &str) -> RepoResult<Option<User>> {
        Ok(self.state.lock().unwrap().users.get(user_id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<User>> {
        Ok(self.state.lock().unwrap().users.values().cloned().collect())
    }

    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let mut state = self.state.lock().unwrap();
        state.attempted_user_ids.push(user.user_id.clone());

        if state.forced_id_collisions > 0 {
            state.forced_id_collisions -= 1;
            return Err(DomainError::UserIdTaken(user.user_id.clone()));
        }
        if state.users.contains_key(&user.user_id) {
            return Err(DomainError::UserIdTaken(user.user_id.clone()));
        }
        if state.users.values().any(|u| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }

        let created = User {
            user_id: user.user_id.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            status: Some(user.status.as_str().to_string()),
            role: user.role,
            created_at: Utc::now(),
        };
        state.users.insert(created.user_id.clone(), created.clone());
        Ok(created)
    }

    async fn update(&self, user_id: &str, update: &UserUpdate) -> RepoResult<Option<User>> {
        let mut state = self.state.lock().unwrap();
        if state
            .users
            .values()
            .any(|u| u.user_id != user_id && u.email == update.email)
        {
            return Err(DomainError::EmailAlreadyExists);
        }

        Ok(state.users.get_mut(user_id).map(|user| {
            user.first_name.clone_from(&update.first_name);
            user.last_name.clone_from(&update.last_name);
            user.email.clone_from(&update.email);
            user.status = Some(update.status.as_str().to_string());
            user.role = update.role;
            user.clone()
        }))
    }

    async fn delete(&self, user_id: &str) -> RepoResult<bool> {
        let mut state = self.state.lock().unwrap();
        if state.transactions.iter().any(|t| t.user_id == user_id) {
            return Err(DomainError::UserHasTransactions(user_id.to_string()));
        }
        Ok(state.users.remove(user_id).is_some())
    }
}

#[async_trait]
impl ItemRepository for InMemoryStore {
    async fn find_by_id(&self, product_id: i64) -> RepoResult<Option<Item>> {
        Ok(self.state.lock().unwrap().items.get(&product_id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Item>> {
        Ok(self.state.lock().unwrap().items.values().cloned().collect())
    }

    async fn find_by_vendor(&self, vendor_id: i64) -> RepoResult<Vec<Item>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .items
            .values()
            .filter(|i| i.vendor_id == vendor_id)
            .cloned()
            .collect())
    }

    async fn find_low_stock(&self, query: LowStockQuery) -> RepoResult<Vec<Item>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .items
            .values()
            .filter(|i| i.is_low_stock(query.quantity, query.weight))
            .cloned()
            .collect())
    }

    async fn exists(&self, product_id: i64) -> RepoResult<bool> {
        Ok(self.state.lock().unwrap().items.contains_key(&product_id))
    }

    async fn create(&self, item: &NewItem) -> RepoResult<Item> {
        let mut state = self.state.lock().unwrap();
        if !state.vendors.contains_key(&item.vendor_id) {
            return Err(DomainError::VendorNotFound(item.vendor_id));
        }
        let created = Item {
            product_id: state.next_id(),
            product_name: item.product_name.clone(),
            item_type: item.item_type.clone(),
            vendor_id: item.vendor_id,
            quantity: item.quantity,
            weight: item.weight,
        };
        state.items.insert(created.product_id, created.clone());
        Ok(created)
    }

    async fn update(&self, product_id: i64, item: &NewItem) -> RepoResult<Option<Item>> {
        let mut state = self.state.lock().unwrap();
        if !state.vendors.contains_key(&item.vendor_id) {
            return Err(DomainError::VendorNotFound(item.vendor_id));
        }
        Ok(state.items.get_mut(&product_id).map(|existing| {
            existing.product_name.clone_from(&item.product_name);
            existing.item_type.clone_from(&item.item_type);
            existing.vendor_id = item.vendor_id;
            existing.quantity = item.quantity;
            existing.weight = item.weight;
            existing.clone()
        }))
    }

    async fn delete(&self, product_id: i64) -> RepoResult<bool> {
        let mut state = self.state.lock().unwrap();
        if state.transactions.iter().any(|t| t.product_id == product_id) {
            return Err(DomainError::ItemHasTransactions(product_id));
        }
        Ok(state.items.remove(&product_id).is_some())
    }
}

#[async_trait]
impl VendorRepository for InMemoryStore {
    async fn find_by_id(&self, vendor_id: i64) -> RepoResult<Option<Vendor>> {
        Ok(self.state.lock().unwrap().vendors.get(&vendor_id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Vendor>> {
        Ok(self.state.lock().unwrap().vendors.values().cloned().collect())
    }

    async fn create(&self, vendor: &NewVendor) -> RepoResult<Vendor> {
        let mut state = self.state.lock().unwrap();
        let created = Vendor {
            vendor_id: state.next_id(),
            vendor_name: vendor.vendor_name.clone(),
            contact_person: vendor.contact_person.clone(),
            address: vendor.address.clone(),
            phone: vendor.phone.clone(),
            email: vendor.email.clone(),
        };
        state.vendors.insert(created.vendor_id, created.clone());
        Ok(created)
    }

    async fn update(&self, vendor_id: i64, vendor: &NewVendor) -> RepoResult<Option<Vendor>> {
        let mut state = self.state.lock().unwrap();
        Ok(state.vendors.get_mut(&vendor_id).map(|existing| {
            *existing = Vendor {
                vendor_id,
                vendor_name: vendor.vendor_name.clone(),
                contact_person: vendor.contact_person.clone(),
                address: vendor.address.clone(),
                phone: vendor.phone.clone(),
                email: vendor.email.clone(),
            };
            existing.clone()
        }))
    }

    async fn delete_if_unreferenced(&self, vendor_id: i64) -> RepoResult<VendorDeletion> {
        let mut state = self.state.lock().unwrap();
        let count = state.items.values().filter(|i| i.vendor_id == vendor_id).count() as i64;
        if count > 0 {
            return Ok(VendorDeletion::HasItems(count));
        }
        Ok(match state.vendors.remove(&vendor_id) {
            Some(_) => VendorDeletion::Deleted,
            None => VendorDeletion::NotFound,
        })
    }
}

#[async_trait]
impl TransactionRepository for InMemoryStore {
    async fn create(&self, transaction: &NewTransaction) -> RepoResult<Option<Transaction>> {
        let mut state = self.state.lock().unwrap();
        if !state.users.contains_key(&transaction.user_id)
            || !state.items.contains_key(&transaction.product_id)
        {
            return Ok(None);
        }
        let created = Transaction {
            transaction_id: state.next_id(),
            user_id: transaction.user_id.clone(),
            product_id: transaction.product_id,
            quantity_taken: transaction.quantity_taken,
            user_status: transaction.user_status,
            taken_at: Utc::now(),
        };
        state.transactions.push(created.clone());
        Ok(Some(created))
    }

    async fn list_detailed(&self) -> RepoResult<Vec<TransactionDetail>> {
        let state = self.state.lock().unwrap();
        Ok(state.transactions.iter().rev().map(|t| state.detail(t)).collect())
    }

    async fn find_by_user(&self, user_id: &str) -> RepoResult<Vec<TransactionDetail>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .transactions
            .iter()
            .rev()
            .filter(|t| t.user_id == user_id)
            .map(|t| state.detail(t))
            .collect())
    }

    async fn count_by_product(&self) -> RepoResult<Vec<ProductTakeCount>> {
        let state = self.state.lock().unwrap();
        let mut counts: BTreeMap<i64, i64> = BTreeMap::new();
        for t in &state.transactions {
            *counts.entry(t.product_id).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .filter_map(|(product_id, total_transactions)| {
                let item = state.items.get(&product_id)?;
                Some(ProductTakeCount {
                    product_id,
                    product_name: item.product_name.clone(),
                    item_type: item.item_type.clone(),
                    total_transactions,
                })
            })
            .collect())
    }

    async fn distinct_users_by_status(&self) -> RepoResult<Vec<StatusCount>> {
        let state = self.state.lock().unwrap();
        let mut users: BTreeMap<String, std::collections::BTreeSet<&str>> = BTreeMap::new();
        for t in &state.transactions {
            users
                .entry(t.user_status.as_str().to_string())
                .or_default()
                .insert(t.user_id.as_str());
        }
        Ok(users
            .into_iter()
            .map(|(status, ids)| StatusCount {
                user_status: Some(status),
                count: ids.len() as i64,
            })
            .collect())
    }
}
