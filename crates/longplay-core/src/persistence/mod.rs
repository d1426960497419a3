mod envelope;
mod reconcile;

pub use {
    envelope::{CURRENT_VERSION, Envelope, serialize},
    reconcile::{deserialize, reconcile_capture},
};
