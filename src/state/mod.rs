//! Shared observable values
//!
//! A small wrapper over `tokio::sync::watch`: one owner-visible value that
//! any number of subscribers can follow. Subscribing is explicit and
//! dropping (or calling [`Subscription::unsubscribe`]) detaches.

use std::sync::Arc;
use tokio::sync::watch;

/// A value that can be read, replaced and watched
#[derive(Debug)]
pub struct Observable<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T> Observable<T>
where
    T: Clone + PartialEq,
{
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replace the value, notifying subscribers only when it changed
    pub fn set(&self, value: T) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }

    /// Replace the value only if it still equals `expected`
    pub fn compare_and_set(&self, expected: &T, value: T) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == *expected && *current != value {
                *current = value;
                true
            } else {
                false
            }
        })
    }

    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// A live view on an [`Observable`]
#[derive(Debug)]
pub struct Subscription<T> {
    rx: watch::Receiver<T>,
}

impl<T: Clone> Subscription<T> {
    /// Wait for the next change. `None` once the observable is gone.
    pub async fn changed(&mut self) -> Option<T> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    pub fn current(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Stop following the observable
    pub fn unsubscribe(self) {}
}
