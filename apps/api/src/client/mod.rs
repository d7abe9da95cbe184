// Client side of the analyze round trip: the upload/result view-model and the
// HTTP client it drives. Parsing of the returned completion happens here.

pub mod api;
pub mod session;
