//! Response envelopes.

use serde::{Serialize, Serializer, ser::SerializeMap};

// Success //
//*********//
/// `{"status": "success", <key>: <payload>}`
///
/// The payload key varies per endpoint (`accounts`, `roles`, ...), so the
/// envelope serializes itself as a two-entry map.
#[derive(Debug)]
pub struct Success<T> {
	pub key: &'static str,
	pub payload: T,
}

impl<T> Success<T> {
	pub fn new(key: &'static str, payload: T) -> Self {
		Success { key, payload }
	}
}

impl<T: Serialize> Serialize for Success<T> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut map = serializer.serialize_map(Some(2))?;
		map.serialize_entry("status", "success")?;
		map.serialize_entry(self.key, &self.payload)?;
		map.end()
	}
}


// vim: ts=4
