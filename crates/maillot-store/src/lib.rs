//! # maillot-store: State Layer
//!
//! Manages the storefront's mutable state as explicit store objects.
//!
//! ## Why Multiple Store Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate store types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each store has a single responsibility
//! 2. **Easier Testing**: Can mock/inject individual stores
//! 3. **Clearer Call Sites**: Components declare exactly what state they need
//! 4. **Reduced Contention**: Independent stores don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     App Startup                                 │   │
//! │  │  let storage = Arc::new(JsonFileStorage::from_project_dirs()?); │   │
//! │  │  let cart = CartStore::new(storage);                            │   │
//! │  │  let catalog = CatalogStore::new();                             │   │
//! │  │  let currency = CurrencyState::new();                           │   │
//! │  │  let toasts = ToastNotifier::new();                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │       ┌──────────────┬───────┴──────┬────────────────┐                 │
//! │       ▼              ▼              ▼                ▼                  │
//! │  ┌──────────┐  ┌────────────┐  ┌────────────┐  ┌────────────┐         │
//! │  │CartStore │  │CatalogStore│  │CurrencyState│ │ToastNotifier│        │
//! │  │          │  │            │  │            │  │            │          │
//! │  │Arc<Mutex<│  │Arc<Mutex<  │  │Arc<RwLock< │  │Arc<Mutex<  │          │
//! │  │  Cart>>  │  │  Catalog>> │  │  Currency>>│  │Vec<Toast>>>│          │
//! │  │+ storage │  │ (seeded)   │  │ (default   │  │+ 3s timers │          │
//! │  └──────────┘  └────────────┘  │   CAD)     │  └────────────┘         │
//! │                                └────────────┘                           │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartStore/CatalogStore: Arc<Mutex<T>> for exclusive mutation        │
//! │  • CurrencyState: RwLock - read-mostly, written on toggle only         │
//! │  • ToastNotifier: Arc<Mutex<Vec<_>>>; expiry runs on tokio timers      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart_store;
pub mod catalog_store;
pub mod currency_state;
pub mod error;
pub mod storage;
pub mod toast;

pub use cart_store::CartStore;
pub use catalog_store::CatalogStore;
pub use currency_state::CurrencyState;
pub use error::StoreError;
pub use storage::{JsonFileStorage, MemoryStorage, StorageBackend, CART_STORAGE_KEY};
pub use toast::{Toast, ToastKind, ToastNotifier, TOAST_DISMISS_AFTER};
