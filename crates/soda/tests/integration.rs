//! Lifecycle bridge and runtime integration tests
//!
//! Notifications flow from DOM mutations through the runtime to the hooks.

use std::cell::RefCell;
use std::rc::Rc;

use soda::dom::{CustomElementRegistry, Document, LifecycleCallback, LifecycleCallbackInfo};
use soda::{ClassCache, Config, Hooks, Host, LifecycleBridge, Registration, Render, Runtime, Soda};

type Log = Rc<RefCell<Vec<String>>>;

/// Logs every hook; requests an update when connected
#[derive(Default)]
struct Watcher {
    log: Log,
}

impl Watcher {
    fn push(&self, entry: impl Into<String>) {
        self.log.borrow_mut().push(entry.into());
    }
}

impl Hooks for Watcher {
    fn connected(&self, host: &Host) {
        self.push("connected");
        host.request_update();
    }

    fn disconnected(&self, _host: &Host) {
        self.push("disconnected");
    }

    fn attribute_changed(
        &self,
        _host: &Host,
        name: &str,
        old_value: Option<&str>,
        new_value: Option<&str>,
    ) {
        self.push(format!("attribute:{name}:{old_value:?}->{new_value:?}"));
    }

    fn adopted(&self, _host: &Host) {
        self.push("adopted");
    }

    fn render<'a>(&'a self, host: &'a Host) -> Render<'a> {
        let label = host.get_attribute("label").unwrap_or_else(|| "Done".into());
        Render::iter(["Loading…".to_string(), label].map(soda::Content::text))
    }

    fn after_update(&self, host: &Host) {
        self.push(format!("after_update:{}", host.text_content()));
    }
}

fn setup(observed: &[&str]) -> (Runtime, Registration) {
    let document = Rc::new(RefCell::new(Document::default()));
    let cache = ClassCache::for_document(&document.borrow(), Config::default());
    let mut registry = CustomElementRegistry::new();
    let registration = cache
        .get_or_create(&Soda, None)
        .unwrap()
        .register_observing(&mut registry, "x-watcher", observed)
        .unwrap();
    (Runtime::new(document), registration)
}

#[test]
fn test_connected_requests_update() {
    let (runtime, registration) = setup(&[]);
    let watcher = Watcher::default();
    let log = watcher.log.clone();
    let component = runtime.create(&registration, watcher).unwrap();

    let body = runtime.document().borrow().body();
    runtime
        .document()
        .borrow_mut()
        .tree_mut()
        .append_child(body, component.node())
        .unwrap();
    runtime.run_until_idle();

    assert_eq!(*log.borrow(), ["connected", "after_update:Done"]);
    assert_eq!(component.host().text_content(), "Done");
    assert_eq!(runtime.pending_updates(), 0);
}

#[test]
fn test_stale_connected_is_suppressed() {
    let (runtime, registration) = setup(&[]);
    let watcher = Watcher::default();
    let log = watcher.log.clone();
    let component = runtime.create(&registration, watcher).unwrap();

    let body = runtime.document().borrow().body();
    {
        let mut doc = runtime.document().borrow_mut();
        doc.tree_mut().append_child(body, component.node()).unwrap();
        doc.tree_mut().remove_child(body, component.node()).unwrap();
        assert_eq!(doc.tree().callbacks().len(), 2);
    }

    assert_eq!(runtime.dispatch(), 2);
    assert_eq!(*log.borrow(), ["disconnected"]);
    assert_eq!(runtime.pending_updates(), 0);
}

#[test]
fn test_direct_connected_callback_checks_host() {
    let (runtime, registration) = setup(&[]);
    let watcher = Watcher::default();
    let log = watcher.log.clone();
    let component = runtime.create(&registration, watcher).unwrap();

    component.connected_callback();
    assert!(log.borrow().is_empty());
    assert!(!component.is_connected());
}

#[test]
fn test_observed_attribute_changes_reach_hook() {
    let (runtime, registration) = setup(&["Label"]);
    let watcher = Watcher::default();
    let log = watcher.log.clone();
    let component = runtime.create(&registration, watcher).unwrap();
    assert_eq!(registration.observed_attributes(), ["label"]);

    component.host().set_attribute("label", "Saved").unwrap();
    component.host().set_attribute("title", "not observed").unwrap();
    runtime.dispatch();

    assert_eq!(*log.borrow(), ["attribute:label:None->Some(\"Saved\")"]);
}

#[test]
fn test_adopted_reaches_hook() {
    let (runtime, registration) = setup(&[]);
    let watcher = Watcher::default();
    let log = watcher.log.clone();
    let component = runtime.create(&registration, watcher).unwrap();

    runtime
        .document()
        .borrow_mut()
        .tree_mut()
        .adopt_node(component.node())
        .unwrap();
    runtime.dispatch();

    assert_eq!(*log.borrow(), ["adopted"]);
}

#[test]
fn test_dispatch_routes_by_element() {
    let (runtime, registration) = setup(&[]);
    let first = Watcher::default();
    let first_log = first.log.clone();
    let second = Watcher::default();
    let second_log = second.log.clone();
    let a = runtime.create(&registration, first).unwrap();
    let b = runtime.create(&registration, second).unwrap();
    assert_eq!(runtime.len(), 2);

    runtime
        .document()
        .borrow_mut()
        .tree_mut()
        .callbacks_mut()
        .enqueue(LifecycleCallbackInfo::new(b.node(), LifecycleCallback::Disconnected));
    assert_eq!(runtime.dispatch(), 1);

    assert!(first_log.borrow().is_empty());
    assert_eq!(*second_log.borrow(), ["disconnected"]);
    assert_ne!(a.node(), b.node());
}

#[test]
fn test_updates_run_concurrently_and_all_finish() {
    let (runtime, registration) = setup(&[]);
    let a = runtime.create(&registration, Watcher::default()).unwrap();
    let b = runtime.create(&registration, Watcher::default()).unwrap();
    b.host().set_attribute("label", "Other").unwrap();

    assert!(a.host().request_update());
    assert!(b.host().request_update());
    assert_eq!(smol::block_on(runtime.run_updates()), 2);

    assert_eq!(a.host().text_content(), "Done");
    assert_eq!(b.host().text_content(), "Other");
}

#[test]
fn test_request_update_without_runtime() {
    let document = Rc::new(RefCell::new(Document::default()));
    let cache = ClassCache::for_document(&document.borrow(), Config::default());
    let mut registry = CustomElementRegistry::new();
    let registration = cache
        .get_or_create(&Soda, None)
        .unwrap()
        .register(&mut registry, "x-loose")
        .unwrap();

    let component = registration.construct(&document, Watcher::default()).unwrap();
    assert!(!component.host().request_update());
}

#[test]
fn test_disconnected_component_stays_until_removed() {
    let (runtime, registration) = setup(&[]);
    let watcher = Watcher::default();
    let log = watcher.log.clone();
    let component = runtime.create(&registration, watcher).unwrap();
    let node = component.node();
    let body = runtime.document().borrow().body();

    runtime.document().borrow_mut().tree_mut().append_child(body, node).unwrap();
    runtime.dispatch();
    runtime.document().borrow_mut().tree_mut().remove_child(body, node).unwrap();
    runtime.dispatch();
    assert_eq!(runtime.len(), 1);

    // Reinsertion still reaches the hooks
    runtime.document().borrow_mut().tree_mut().append_child(body, node).unwrap();
    runtime.dispatch();
    assert_eq!(*log.borrow(), ["connected", "disconnected", "connected"]);

    assert!(runtime.remove(node).is_some());
    assert!(runtime.remove(node).is_none());
    assert!(runtime.is_empty());
    assert!(runtime.component(node).is_none());

    runtime.document().borrow_mut().tree_mut().remove_child(body, node).unwrap();
    assert_eq!(runtime.dispatch(), 0);
    runtime.run_until_idle();
    assert_eq!(log.borrow().len(), 3);
    assert_eq!(Rc::strong_count(&component), 1);
}

#[test]
fn test_removed_components_are_released() {
    let (runtime, registration) = setup(&[]);
    let body = runtime.document().borrow().body();

    for _ in 0..100 {
        let component = runtime.create(&registration, Watcher::default()).unwrap();
        let node = component.node();
        runtime.document().borrow_mut().tree_mut().append_child(body, node).unwrap();
        runtime.document().borrow_mut().tree_mut().remove_child(body, node).unwrap();
        runtime.dispatch();
        runtime.remove(node);
    }

    assert!(runtime.is_empty());
}

#[test]
fn test_duplicate_requests_update_same_component_twice() {
    let (runtime, registration) = setup(&[]);
    let watcher = Watcher::default();
    let log = watcher.log.clone();
    let component = runtime.create(&registration, watcher).unwrap();

    assert!(component.host().request_update());
    assert!(component.host().request_update());
    assert_eq!(runtime.pending_updates(), 2);
    assert_eq!(smol::block_on(runtime.run_updates()), 2);

    assert_eq!(*log.borrow(), ["after_update:Done", "after_update:Done"]);
    assert_eq!(component.host().text_content(), "Done");
    assert_eq!(runtime.pending_updates(), 0);
}
