//! Loading indicator
//!
//! Registers an autonomous element that renders a placeholder while its data
//! is fetched, mounts it and prints what ends up in its shadow root.
//!
//! Run with `RUST_LOG=soda=debug cargo run -p soda --example loading`

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use smol::stream::StreamExt;
use soda::dom::{CustomElementRegistry, Document};
use soda::{ClassCache, Config, Content, Hooks, Host, Render, Runtime, Soda};
use tracing_subscriber::EnvFilter;

struct UserCard;

impl Hooks for UserCard {
    fn use_shadow(&self) -> bool {
        true
    }

    fn connected(&self, host: &Host) {
        host.request_update();
    }

    fn render<'a>(&'a self, host: &'a Host) -> Render<'a> {
        let user = host.get_attribute("user").unwrap_or_else(|| "anonymous".into());
        let steps = smol::stream::iter([
            Ok::<_, anyhow::Error>(Content::text("Loading…")),
            Ok(Content::text(format!("Hello, {user}"))),
        ])
        .then(|step| async move {
            smol::Timer::after(Duration::from_millis(50)).await;
            step
        });
        Render::stream(steps)
    }

    fn after_update(&self, host: &Host) {
        tracing::info!("Rendered: {}", host.text_content());
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let document = Rc::new(RefCell::new(Document::new("https://example.com/")));
    let cache = ClassCache::for_document(&document.borrow(), Config::default());
    let mut registry = CustomElementRegistry::new();

    let class = cache.get_or_create(&Soda, None)?;
    let registration = class.register_observing(&mut registry, "user-card", &["user"])?;

    let runtime = Runtime::new(document.clone());
    let card = runtime.create(&registration, UserCard)?;
    card.host().set_attribute("user", "ada")?;

    let body = document.borrow().body();
    document.borrow_mut().tree_mut().append_child(body, card.node())?;
    document.borrow_mut().finish_loading();

    runtime.run_until_idle();
    smol::block_on(class.document_ready().wait());

    println!("<user-card> shadow root: {:?}", card.host().text_content());
    Ok(())
}
