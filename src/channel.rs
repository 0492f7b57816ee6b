use std::sync::mpsc;

use serde::de::DeserializeOwned;

/// Name of the channel carrying edit mode change requests.
pub const CHANGE_EDIT_MODE: &str = "change_edit_mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What the receiving side did with one raw payload.
pub enum Delivery {
    Applied,
    Unchanged,
    Ignored,
}

enum Envelope<T> {
    Value(T),
    Raw {
        payload: serde_json::Value,
        reply: mpsc::Sender<Delivery>,
    },
}

/// Handle for the fate of a single raw payload.
pub struct Receipt {
    rx: mpsc::Receiver<Delivery>,
}

impl Receipt {
    /// `None` until the channel has been drained and the value settled.
    pub fn try_take(&self) -> Option<Delivery> {
        self.rx.try_recv().ok()
    }
}

/// A decoded value, plus the reply slot of the raw payload it came from.
pub struct Received<T> {
    pub value: T,
    reply: Option<mpsc::Sender<Delivery>>,
}

impl<T> Received<T> {
    pub fn settle(self, applied: bool) {
        if let Some(reply) = self.reply {
            let delivery = if applied {
                Delivery::Applied
            } else {
                Delivery::Unchanged
            };
            let _ = reply.send(delivery);
        }
    }
}

/// Values received by one [`Channel::drain`] call.
pub struct Drained<T> {
    pub values: Vec<Received<T>>,
    pub ignored: usize,
}

/// Named, typed broadcast channel owned by a single view tree.
///
/// Publishers are cheap handles handed to child views. Raw JSON payloads are
/// decoded into `T` when drained; anything that does not decode is dropped.
pub struct Channel<T> {
    name: &'static str,
    tx: mpsc::Sender<Envelope<T>>,
    rx: mpsc::Receiver<Envelope<T>>,
}

impl<T: DeserializeOwned> Channel<T> {
    pub fn new(name: &'static str) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { name, tx, rx }
    }

    pub fn publisher(&self) -> Publisher<T> {
        Publisher {
            name: self.name,
            tx: self.tx.clone(),
        }
    }

    /// Takes every pending payload, in publish order.
    pub fn drain(&self) -> Drained<T> {
        let mut drained = Drained {
            values: Vec::new(),
            ignored: 0,
        };
        while let Ok(envelope) = self.rx.try_recv() {
            match envelope {
                Envelope::Value(value) => drained.values.push(Received { value, reply: None }),
                Envelope::Raw { payload, reply } => match serde_json::from_value::<T>(payload) {
                    Ok(value) => drained.values.push(Received {
                        value,
                        reply: Some(reply),
                    }),
                    Err(err) => {
                        tracing::debug!(channel = self.name, %err, "ignoring undecodable payload");
                        let _ = reply.send(Delivery::Ignored);
                        drained.ignored += 1;
                    }
                },
            }
        }
        drained
    }
}

pub struct Publisher<T> {
    name: &'static str,
    tx: mpsc::Sender<Envelope<T>>,
}

impl<T> Clone for Publisher<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            tx: self.tx.clone(),
        }
    }
}

impl<T> Publisher<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn send(&self, value: T) {
        // Receiver only goes away with the owning view tree.
        let _ = self.tx.send(Envelope::Value(value));
    }

    /// Publishes an untyped payload, decoded by the receiving side.
    pub fn send_raw(&self, payload: serde_json::Value) -> Receipt {
        let (reply, rx) = mpsc::channel();
        let _ = self.tx.send(Envelope::Raw { payload, reply });
        Receipt { rx }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::EditMode;
    use serde_json::json;

    #[test]
    fn drain_preserves_publish_order() {
        let channel = Channel::<EditMode>::new(CHANGE_EDIT_MODE);
        let publisher = channel.publisher();
        publisher.send(EditMode::Active);
        publisher.send_raw(json!("inactive"));
        publisher.send(EditMode::Active);

        let drained = channel.drain();
        let values: Vec<EditMode> = drained.values.iter().map(|r| r.value).collect();
        assert_eq!(
            values,
            vec![EditMode::Active, EditMode::Inactive, EditMode::Active]
        );
        assert_eq!(drained.ignored, 0);
        assert!(channel.drain().values.is_empty());
    }

    #[test]
    fn undecodable_payloads_are_counted_and_dropped() {
        let channel = Channel::<EditMode>::new(CHANGE_EDIT_MODE);
        let publisher = channel.publisher();
        publisher.send_raw(json!(42));
        publisher.send_raw(json!({ "mode": "active" }));
        publisher.send_raw(json!("editing"));

        let drained = channel.drain();
        assert!(drained.values.is_empty());
        assert_eq!(drained.ignored, 3);
    }

    #[test]
    fn receipts_report_each_payload_separately() {
        let channel = Channel::<EditMode>::new(CHANGE_EDIT_MODE);
        let publisher = channel.publisher();
        let bad = publisher.send_raw(json!(7));
        let good = publisher.send_raw(json!("active"));
        assert_eq!(good.try_take(), None);

        let mut drained = channel.drain();
        assert_eq!(bad.try_take(), Some(Delivery::Ignored));
        assert_eq!(good.try_take(), None);
        drained.values.remove(0).settle(true);
        assert_eq!(good.try_take(), Some(Delivery::Applied));
    }

    #[test]
    fn cloned_publishers_share_the_channel() {
        let channel = Channel::<EditMode>::new(CHANGE_EDIT_MODE);
        let a = channel.publisher();
        let b = a.clone();
        a.send(EditMode::Active);
        b.send(EditMode::Inactive);
        assert_eq!(b.name(), "change_edit_mode");
        assert_eq!(channel.drain().values.len(), 2);
    }

    #[test]
    fn publishing_after_channel_drop_is_silent() {
        let publisher = Channel::<EditMode>::new(CHANGE_EDIT_MODE).publisher();
        publisher.send(EditMode::Active);
    }
}
