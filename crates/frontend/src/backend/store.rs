use contracts::domain::sale::SaleRecord;
use serde::de::DeserializeOwned;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MessageEvent, WebSocket};

/// Collection path holding the sale records.
const SALES_COLLECTION: &str = "sell";

/// Read-only handle to the realtime document store.
///
/// The store pushes full-snapshot replacement events: every message carries
/// the complete current state of a collection as a JSON object keyed by
/// opaque record id (`null` when the collection is empty). There is no
/// delta protocol, no query and no write path.
pub struct StoreHandle {
    endpoint: &'static str,
    api_key: &'static str,
}

impl StoreHandle {
    pub(super) fn new(endpoint: &'static str, api_key: &'static str) -> Self {
        StoreHandle { endpoint, api_key }
    }

    /// Open a live subscription on `collection`.
    ///
    /// `on_snapshot` receives the decoded `(key, value)` pairs of every
    /// snapshot, always as a complete replacement. The subscription stays
    /// open until the returned handle is cancelled or dropped.
    pub fn subscribe<T, F>(&self, collection: &str, on_snapshot: F) -> Result<Subscription, String>
    where
        T: DeserializeOwned + 'static,
        F: Fn(Vec<(String, T)>) + 'static,
    {
        let url = format!("{}/{}?key={}", self.endpoint, collection, self.api_key);
        let socket = WebSocket::new(&url)
            .map_err(|e| format!("Failed to open subscription on {}: {:?}", collection, e))?;

        let collection_name = collection.to_string();
        let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
            let Some(text) = event.data().as_string() else {
                log::warn!("{}: ignoring non-text snapshot frame", collection_name);
                return;
            };
            match decode_snapshot::<T>(&text) {
                Ok(items) => on_snapshot(items),
                Err(err) => log::warn!("{}: dropping snapshot: {}", collection_name, err),
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        let error_collection = collection.to_string();
        let on_error = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            log::error!("subscription error on collection {}", error_collection);
        }) as Box<dyn FnMut(web_sys::Event)>);
        socket.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        Ok(Subscription {
            socket,
            _on_message: on_message,
            _on_error: on_error,
        })
    }

    /// Live subscription on the fixed `sell` collection, with the store key
    /// injected as `SaleRecord::id`.
    pub fn subscribe_sales<F>(&self, on_snapshot: F) -> Result<Subscription, String>
    where
        F: Fn(Vec<SaleRecord>) + 'static,
    {
        self.subscribe::<SaleRecord, _>(SALES_COLLECTION, move |items| {
            let sales = items
                .into_iter()
                .map(|(key, mut sale)| {
                    sale.id = key;
                    sale
                })
                .collect();
            on_snapshot(sales);
        })
    }
}

/// A live subscription. Cancelling (or dropping) detaches the message
/// handlers and closes the socket; no further snapshots are delivered.
pub struct Subscription {
    socket: WebSocket,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(web_sys::Event)>,
}

impl Subscription {
    pub fn cancel(self) {
        // Drop does the actual teardown.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.socket.set_onmessage(None);
        self.socket.set_onerror(None);
        if matches!(
            self.socket.ready_state(),
            WebSocket::CONNECTING | WebSocket::OPEN
        ) {
            if let Err(err) = self.socket.close() {
                log::warn!("failed to close subscription socket: {:?}", err);
            }
        }
    }
}

/// Decode one snapshot frame.
///
/// `null` means the collection is empty and yields an empty list, so a
/// cleared collection wipes any previously delivered records. An entry that
/// fails to decode is skipped and logged rather than failing the snapshot.
fn decode_snapshot<T: DeserializeOwned>(raw: &str) -> Result<Vec<(String, T)>, String> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| format!("invalid snapshot JSON: {}", e))?;

    let map = match value {
        serde_json::Value::Null => return Ok(Vec::new()),
        serde_json::Value::Object(map) => map,
        other => {
            return Err(format!(
                "snapshot is not an object or null (got {})",
                match other {
                    serde_json::Value::Array(_) => "array",
                    serde_json::Value::String(_) => "string",
                    serde_json::Value::Number(_) => "number",
                    serde_json::Value::Bool(_) => "bool",
                    _ => "unknown",
                }
            ))
        }
    };

    let mut items = Vec::with_capacity(map.len());
    for (key, entry) in map {
        match serde_json::from_value::<T>(entry) {
            Ok(item) => items.push((key, item)),
            Err(err) => log::warn!("skipping malformed record {}: {}", key, err),
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::sale::PaymentMethod;

    #[test]
    fn null_snapshot_is_an_empty_list() {
        let items = decode_snapshot::<SaleRecord>("null").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn snapshot_entries_keep_their_store_keys() {
        let raw = r#"{
            "-Nx1": {"name": "Soap", "price": 100.0, "method": "cash", "soldAt": "2024-01-05"},
            "-Nx2": {"name": "Brush", "price": 50.0, "method": "online", "soldAt": "2024-02-10"}
        }"#;
        let items = decode_snapshot::<SaleRecord>(raw).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].0, "-Nx1");
        assert_eq!(items[0].1.method, PaymentMethod::Cash);
        assert_eq!(items[1].1.price, 50.0);
    }

    #[test]
    fn malformed_entries_are_skipped_not_fatal() {
        let raw = r#"{
            "good": {"name": "Soap", "price": 10.0, "method": "cash", "soldAt": "2024-01-05"},
            "bad": {"name": "Mystery", "method": "cheque"}
        }"#;
        let items = decode_snapshot::<SaleRecord>(raw).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].0, "good");
    }

    #[test]
    fn non_object_snapshots_are_rejected() {
        assert!(decode_snapshot::<SaleRecord>("[1,2,3]").is_err());
        assert!(decode_snapshot::<SaleRecord>("not json at all").is_err());
    }
}
