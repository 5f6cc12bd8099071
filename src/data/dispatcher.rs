use {
    eframe::egui::Context,
    std::sync::mpsc::{self, Receiver, Sender},
};

use crate::data::{RateResolver, ResolveOutcome, ResolveTicket};

#[cfg(not(target_arch = "wasm32"))]
use {
    anyhow::{Context as _, Result},
    tokio::runtime::{Builder, Runtime},
};

/// Runs resolve tickets off the UI thread and hands outcomes back through a channel.
/// Native: a small tokio runtime. WASM: the browser's microtask queue.
pub struct ResolveDispatcher {
    resolver: RateResolver,
    tx: Sender<ResolveOutcome>,
    rx: Receiver<ResolveOutcome>,
    #[cfg(not(target_arch = "wasm32"))]
    runtime: Runtime,
}

impl ResolveDispatcher {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(resolver: RateResolver) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("rate-resolver")
            .enable_all()
            .build()
            .context("Failed to create resolver runtime")?;
        let (tx, rx) = mpsc::channel();
        Ok(Self {
            resolver,
            tx,
            rx,
            runtime,
        })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new(resolver: RateResolver) -> anyhow::Result<Self> {
        let (tx, rx) = mpsc::channel();
        Ok(Self { resolver, tx, rx })
    }

    /// Fire and forget. Nothing is cancelled; stale outcomes are filtered by the receiver.
    pub fn dispatch(&self, ticket: ResolveTicket, ctx: &Context) {
        let resolver = self.resolver.clone();
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        let task = async move {
            let result = resolver.resolve(ticket.pair).await;
            let _ = tx.send(ResolveOutcome {
                seq: ticket.seq,
                pair: ticket.pair,
                result,
            });
            ctx.request_repaint();
        };

        #[cfg(not(target_arch = "wasm32"))]
        self.runtime.spawn(task);

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(task);
    }

    /// Everything that finished since the last frame, oldest first.
    pub fn drain(&self) -> Vec<ResolveOutcome> {
        self.rx.try_iter().collect()
    }
}
