pub mod traits {
    pub mod chunk_source;
    pub mod chunk_stream;
}

pub mod models {
    pub mod iters {
        pub mod chunk_iter;
        pub mod unit_iter;
    }
    pub mod streams {
        pub mod chunk_stream;
        pub mod disk;
        pub mod unit_stream;
    }
    pub mod sources {
        pub mod chars;
        #[cfg(feature = "udp")]
        pub mod udp;
    }
}

pub mod constants;
pub mod enums;
pub mod error;
pub mod utils;

pub use crate::enums::{ChunkSize, Disposal};
pub use crate::error::ChunkError;
