pub mod roster_cache;

pub use roster_cache::{
    get_roster_index, load_index_from_lz4_bytes, load_index_from_path, RosterIndex,
    DEFAULT_ROSTER_CACHE_REL_PATH, ROSTER_CACHE_ENV,
};
