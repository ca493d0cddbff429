//! Common utilities for integration tests.

#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicI64, AtomicUsize, Ordering},
    Arc, Mutex,
};

use alloy::primitives::Address;
use async_trait::async_trait;
use token_lookup_bot::{
    bot::{ChatId, ChatTransport, MessageHandle, ReplyMessage, TextFormat},
    error::ReadError,
    ethereum::TokenReader,
    services::{MetadataService, PriceFetcher},
    types::PriceQuote,
    AppError, LookupBot,
};

/// Checksummed USDC address on mainnet.
pub const USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";

/// Something the bot did through the chat transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    /// A new message.
    Message { chat_id: ChatId, message_id: i64, reply: ReplyMessage },
    /// An in-place edit.
    Edit { handle: MessageHandle, reply: ReplyMessage },
}

/// Chat transport double that records every accepted call.
#[derive(Default)]
pub struct RecordingTransport {
    events: Mutex<Vec<Sent>>,
    next_id: AtomicI64,
    reject_html_edits: bool,
}

impl RecordingTransport {
    /// A transport that refuses every HTML edit, as Telegram does for bad markup
    /// or oversized text.
    pub fn rejecting_html_edits() -> Self {
        Self { reject_html_edits: true, ..Self::default() }
    }

    pub fn events(&self) -> Vec<Sent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn send_message(
        &self,
        chat_id: ChatId,
        reply: &ReplyMessage,
    ) -> token_lookup_bot::Result<MessageHandle> {
        let message_id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.events.lock().unwrap().push(Sent::Message {
            chat_id,
            message_id,
            reply: reply.clone(),
        });
        Ok(MessageHandle { chat_id, message_id })
    }

    async fn edit_message(
        &self,
        handle: MessageHandle,
        reply: &ReplyMessage,
    ) -> token_lookup_bot::Result<()> {
        if self.reject_html_edits && reply.format == TextFormat::Html {
            return Err(AppError::Telegram("Bad Request: message is too long".to_string()));
        }
        self.events.lock().unwrap().push(Sent::Edit { handle, reply: reply.clone() });
        Ok(())
    }
}

/// Token reader double with a scripted outcome per field.
pub struct StubReader {
    pub name: Result<String, ReadError>,
    pub symbol: Result<String, ReadError>,
    pub decimals: Result<u8, ReadError>,
    pub calls: AtomicUsize,
}

impl StubReader {
    pub fn usdc() -> Self {
        Self {
            name: Ok("USD Coin".to_string()),
            symbol: Ok("USDC".to_string()),
            decimals: Ok(6),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self { name: refused(), symbol: refused(), decimals: refused(), calls: AtomicUsize::new(0) }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn refused<T>() -> Result<T, ReadError> {
    Err(ReadError::Unreachable("connection refused".to_string()))
}

#[async_trait]
impl TokenReader for StubReader {
    async fn name(&self, _token: Address) -> Result<String, ReadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.name.clone()
    }

    async fn symbol(&self, _token: Address) -> Result<String, ReadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.symbol.clone()
    }

    async fn decimals(&self, _token: Address) -> Result<u8, ReadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.decimals.clone()
    }
}

/// Scripted price service behaviour.
#[derive(Debug, Clone, Copy)]
pub enum PriceBehavior {
    Listed(f64),
    Unlisted,
    Fails,
}

/// Price fetcher double.
pub struct StubPrice {
    pub behavior: PriceBehavior,
    pub calls: AtomicUsize,
}

impl StubPrice {
    pub fn new(behavior: PriceBehavior) -> Self {
        Self { behavior, calls: AtomicUsize::new(0) }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceFetcher for StubPrice {
    async fn fetch_price(&self, _token: Address) -> token_lookup_bot::Result<PriceQuote> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            PriceBehavior::Listed(usd) => Ok(Some(usd)),
            PriceBehavior::Unlisted => Ok(None),
            PriceBehavior::Fails => Err(AppError::PriceFetch("status 503".to_string())),
        }
    }
}

/// A bot wired to doubles, plus handles to inspect them.
pub struct Harness {
    pub bot: LookupBot,
    pub transport: Arc<RecordingTransport>,
    pub reader: Arc<StubReader>,
    pub price: Arc<StubPrice>,
}

pub fn harness(reader: StubReader, price: PriceBehavior) -> Harness {
    let transport = Arc::new(RecordingTransport::default());
    let reader = Arc::new(reader);
    let price = Arc::new(StubPrice::new(price));

    let bot = LookupBot::new(
        transport.clone(),
        MetadataService::new(reader.clone()),
        price.clone(),
    );

    Harness { bot, transport, reader, price }
}
