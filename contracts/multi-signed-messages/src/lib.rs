#![no_std]

pub mod error;

mod interface;

#[cfg(all(target_family = "wasm", feature = "testutils"))]
compile_error!("'testutils' feature is not supported on 'wasm' target");

#[cfg(feature = "testutils")]
pub mod testutils;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "library", not(feature = "testutils")))] {
        pub use interface::{MultiSignedMessagesClient, MultiSignedMessagesInterface};
    } else {
        mod event;
        mod storage_types;

        pub mod contract;
        pub use contract::{MultiSignedMessages, MultiSignedMessagesClient};
        pub use interface::MultiSignedMessagesInterface;
    }
}
