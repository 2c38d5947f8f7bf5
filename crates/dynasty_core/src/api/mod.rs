pub mod resolve_json;

pub use resolve_json::{
    describe_last_honor_json, resolve_entry_json, resolve_honors_json, AutoLinkRecord,
    ConfirmationRecord, NewPlayerRecord, ResolveEntryRequest, ResolveEntryResponse,
    ResolveRequest, ResolveResponse, RESOLVE_SCHEMA_VERSION,
};
