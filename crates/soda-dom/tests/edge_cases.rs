//! Edge case tests for soda-dom
//!
//! Connection tracking, lifecycle queue contents and registry rules.

use soda_dom::{
    CustomElementError, CustomElementRegistry, Document, DomError, LifecycleCallback,
    NodeId, ShadowRootInit, ShadowRootMode,
};

fn custom(doc: &mut Document, tag: &str) -> NodeId {
    let id = doc.tree.create_element(tag);
    doc.tree.mark_custom(id, vec!["value".into()]).unwrap();
    id
}

fn callbacks(doc: &mut Document) -> Vec<(NodeId, LifecycleCallback)> {
    doc.tree
        .take_callbacks()
        .into_iter()
        .map(|info| (info.element, info.callback))
        .collect()
}

// ============================================================================
// CONNECTION TRACKING
// ============================================================================

#[test]
fn test_detached_elements_are_not_connected() {
    let mut doc = Document::default();
    let el = custom(&mut doc, "x-card");
    assert!(!doc.tree.is_connected(el));
    assert!(!doc.tree.is_connected(NodeId::NONE));
}

#[test]
fn test_move_between_parents_disconnects_then_connects() {
    let mut doc = Document::default();
    let body = doc.body();
    let a = doc.tree.create_element("div");
    let b = doc.tree.create_element("div");
    doc.tree.append_child(body, a).unwrap();
    doc.tree.append_child(body, b).unwrap();

    let el = custom(&mut doc, "x-card");
    doc.tree.append_child(a, el).unwrap();
    doc.tree.append_child(b, el).unwrap();

    assert_eq!(
        callbacks(&mut doc),
        [
            (el, LifecycleCallback::Connected),
            (el, LifecycleCallback::Disconnected),
            (el, LifecycleCallback::Connected),
        ]
    );
    assert!(doc.tree.children(a).is_empty());
    assert_eq!(doc.tree.children(b), [el]);
}

#[test]
fn test_remove_child_requires_parent() {
    let mut doc = Document::default();
    let body = doc.body();
    let el = custom(&mut doc, "x-card");
    assert_eq!(
        doc.tree.remove_child(body, el),
        Err(DomError::NotAChild { parent: body, child: el })
    );

    doc.tree.append_child(body, el).unwrap();
    doc.tree.remove_child(body, el).unwrap();
    assert!(!doc.tree.is_connected(el));
}

#[test]
fn test_replace_children_disconnects_old_content() {
    let mut doc = Document::default();
    let body = doc.body();
    let old = custom(&mut doc, "x-old");
    doc.tree.append_child(body, old).unwrap();
    callbacks(&mut doc);

    let fresh = doc.tree.create_text("fresh");
    doc.tree.replace_children(body, vec![fresh]).unwrap();

    assert_eq!(callbacks(&mut doc), [(old, LifecycleCallback::Disconnected)]);
    assert_eq!(doc.tree.text_content(body), "fresh");
    assert_eq!(doc.tree.parent(old), None);
}

#[test]
fn test_cannot_insert_text_children_or_shadow_roots() {
    let mut doc = Document::default();
    let text = doc.tree.create_text("leaf");
    let el = doc.tree.create_element("div");
    assert!(matches!(
        doc.tree.append_child(text, el),
        Err(DomError::HierarchyRequest { .. })
    ));

    let body = doc.body();
    let shadow = doc.tree.attach_shadow(el, ShadowRootInit::default()).unwrap();
    assert!(doc.tree.append_child(body, shadow).is_err());
}

// ============================================================================
// SHADOW ROOTS
// ============================================================================

#[test]
fn test_shadow_not_supported_on_button() {
    let mut doc = Document::default();
    let button = doc.tree.create_element("button");
    assert_eq!(
        doc.tree.attach_shadow(button, ShadowRootInit::default()),
        Err(DomError::ShadowNotSupported("button".into()))
    );
    assert_eq!(doc.tree.shadow_root(button), None);
}

#[test]
fn test_shadow_root_keeps_init() {
    let mut doc = Document::default();
    let host = custom(&mut doc, "x-panel");
    let init = ShadowRootInit { mode: ShadowRootMode::Closed, delegates_focus: true };
    let shadow = doc.tree.attach_shadow(host, init).unwrap();

    let data = doc.tree.get(shadow).and_then(|n| n.as_shadow_root()).unwrap();
    assert_eq!(data.host, host);
    assert_eq!(data.mode, ShadowRootMode::Closed);
    assert!(data.delegates_focus);
}

// ============================================================================
// ADOPTION & ATTRIBUTES
// ============================================================================

#[test]
fn test_adopt_node_queues_adopted() {
    let mut doc = Document::default();
    let body = doc.body();
    let el = custom(&mut doc, "x-card");
    doc.tree.append_child(body, el).unwrap();
    callbacks(&mut doc);

    doc.tree.adopt_node(el).unwrap();
    assert_eq!(
        callbacks(&mut doc),
        [(el, LifecycleCallback::Disconnected), (el, LifecycleCallback::Adopted)]
    );
}

#[test]
fn test_attribute_names_are_case_insensitive() {
    let mut doc = Document::default();
    let el = custom(&mut doc, "x-field");
    doc.tree.set_attribute(el, "VALUE", "1").unwrap();
    doc.tree.set_attribute(el, "value", "2").unwrap();

    assert_eq!(doc.tree.get_attribute(el, "Value"), Some("2"));
    assert_eq!(
        callbacks(&mut doc)[1].1,
        LifecycleCallback::AttributeChanged {
            name: "value".into(),
            old_value: Some("1".into()),
            new_value: Some("2".into()),
        }
    );
}

#[test]
fn test_attributes_on_text_fail() {
    let mut doc = Document::default();
    let text = doc.tree.create_text("x");
    assert_eq!(doc.tree.set_attribute(text, "a", "b"), Err(DomError::NotAnElement(text)));
}

// ============================================================================
// REGISTRY
// ============================================================================

#[test]
fn test_registry_names_shared_between_kinds() {
    let mut registry = CustomElementRegistry::new();
    registry.define_customized("x-button", "button", 1, Vec::new()).unwrap();
    assert_eq!(
        registry.define_autonomous("x-button", 2, Vec::new()).unwrap_err(),
        CustomElementError::AlreadyDefined("x-button".into())
    );
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_invalid_names_rejected_for_customized() {
    let mut registry = CustomElementRegistry::new();
    assert!(matches!(
        registry.define_customized("Nope", "button", 1, Vec::new()),
        Err(CustomElementError::InvalidName(_))
    ));
}
