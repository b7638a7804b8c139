pub mod state;
pub mod store;
pub mod updaters;
pub mod view_model;

pub use state::{AppointmentState, FILL_ALL_FIELDS};
pub use store::{AppointmentStore, StoreConfig};
pub use updaters::{apply, StateUpdate};
pub use view_model::{ViewModel, ViewModelSubscription};
