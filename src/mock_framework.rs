//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_handle`] to get a handle and the raw request receiver,
//! then pull requests off with the `expect_*` helpers and answer them.

use tokio::sync::mpsc;

use crate::actor_framework::{Response, StorefrontHandle, StorefrontRequest};
use crate::domain::{CartView, Item, ItemId};

/// Creates a handle whose requests land on a receiver the test controls.
pub fn create_mock_handle(buffer_size: usize) -> (StorefrontHandle, mpsc::Receiver<StorefrontRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StorefrontHandle::new(sender), receiver)
}

pub async fn expect_find_item(
    receiver: &mut mpsc::Receiver<StorefrontRequest>,
) -> Option<(ItemId, Response<Option<Item>>)> {
    match receiver.recv().await {
        Some(StorefrontRequest::FindItem { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

pub async fn expect_add_item(
    receiver: &mut mpsc::Receiver<StorefrontRequest>,
) -> Option<(Item, Response<CartView>)> {
    match receiver.recv().await {
        Some(StorefrontRequest::AddItem { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

pub async fn expect_cart_snapshot(
    receiver: &mut mpsc::Receiver<StorefrontRequest>,
) -> Option<Response<CartView>> {
    match receiver.recv().await {
        Some(StorefrontRequest::CartSnapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

pub async fn expect_update_quantity(
    receiver: &mut mpsc::Receiver<StorefrontRequest>,
) -> Option<(ItemId, i64, Response<CartView>)> {
    match receiver.recv().await {
        Some(StorefrontRequest::UpdateQuantity { id, quantity, respond_to }) => {
            Some((id, quantity, respond_to))
        }
        _ => None,
    }
}

pub async fn expect_adjust_quantity(
    receiver: &mut mpsc::Receiver<StorefrontRequest>,
) -> Option<(ItemId, i64, Response<CartView>)> {
    match receiver.recv().await {
        Some(StorefrontRequest::AdjustQuantity { id, delta, respond_to }) => Some((id, delta, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_mock_handle() {
        let (handle, mut receiver) = create_mock_handle(10);

        let task = tokio::spawn(async move { handle.cart_snapshot().await });

        let responder = expect_cart_snapshot(&mut receiver).await.expect("Expected CartSnapshot request");
        let empty = CartView {
            lines: vec![],
            item_count: 0,
            total: Decimal::ZERO,
        };
        responder.send(Ok(empty.clone())).unwrap();

        assert_eq!(task.await.unwrap(), Ok(empty));
    }
}
