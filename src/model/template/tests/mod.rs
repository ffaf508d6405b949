//! TemplateModel 单元测试

use super::*;
use crate::model::options::JavaVersion;
use crate::model::unit::{ForBlockBegin, ValueExpression};

fn model() -> TemplateModel {
    TemplateModel::new("views.system", "index.rocker.html", &Options::default())
}

fn at(line: usize) -> SourceRef {
    SourceRef::at(line, 1, "")
}

#[test]
fn test_identity() {
    let model = model();
    assert_eq!(model.package_name(), "views.system");
    assert_eq!(model.template_name(), "index.rocker.html");
    assert_eq!(model.name(), "index");
    assert_eq!(model.content_type(), ContentType::Html);
    assert!(model.imports().is_empty());
    assert!(model.arguments().is_empty());
    assert!(model.units().is_empty());
}

#[test]
fn test_imports_keep_order() {
    let mut model = model();
    model.add_import("java.util.List", at(1));
    model.add_import("java.util.List", at(2));
    model.add_import("views.Layout", at(3));
    let statements: Vec<_> = model.imports().iter().map(|i| i.statement.as_str()).collect();
    assert_eq!(statements, vec!["java.util.List", "java.util.List", "views.Layout"]);
}

#[test]
fn test_rocker_body_argument() {
    let mut model = model();
    model.add_argument("String", "title", at(1));
    model.add_argument("int", "count", at(1));
    model.add_argument("RockerBody", "content", at(1));

    assert!(model.has_rocker_body_argument());
    assert_eq!(model.rocker_body_argument().map(|a| a.name.as_str()), Some("content"));
    let names: Vec<_> = model
        .arguments_without_rocker_body()
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, vec!["title", "count"]);
    assert_eq!(model.arguments().len(), 3);
}

#[test]
fn test_without_rocker_body_argument() {
    let mut model = model();
    assert!(!model.has_rocker_body_argument());
    assert!(model.arguments_without_rocker_body().is_empty());

    model.add_argument("String", "title", at(1));
    assert!(!model.has_rocker_body_argument());
    assert_eq!(model.rocker_body_argument(), None);
    assert_eq!(model.arguments_without_rocker_body(), model.arguments());
}

#[test]
fn test_typed_unit_access() {
    let mut model = model();
    model.add_unit(TemplateUnit::plain_text("<p>", at(1)));
    model.add_unit(TemplateUnit::for_begin("i : items", at(2)));
    model.add_unit(TemplateUnit::value("i", at(3)));
    model.add_unit(TemplateUnit::for_end(at(4)));

    assert_eq!(model.unit::<PlainText>(0).map(PlainText::text), Some("<p>"));
    assert_eq!(
        model.unit::<ForBlockBegin>(1).map(|b| b.expression.as_str()),
        Some("i : items")
    );
    assert_eq!(
        model.unit::<ValueExpression>(2).map(|v| v.source_ref.line()),
        Some(3)
    );
    assert!(model.unit::<PlainText>(1).is_none());
    assert!(model.unit::<PlainText>(99).is_none());
    assert!(model.validate_structure().is_ok());
}

#[test]
fn test_add_unit_does_not_combine() {
    let mut model = model();
    model.add_unit(TemplateUnit::plain_text("a", at(1)));
    model.add_unit(TemplateUnit::plain_text("a", at(1)));
    assert_eq!(model.units().len(), 2);
}

#[test]
fn test_add_plain_text_combines() {
    let mut model = model();
    model.add_plain_text("<h1>", at(1));
    model.add_plain_text("Title</h1>", at(1));
    model.add_unit(TemplateUnit::value("x", at(2)));
    model.add_plain_text("tail", at(3));

    assert_eq!(model.units().len(), 3);
    assert_eq!(model.unit::<PlainText>(0).map(PlainText::text), Some("<h1>Title</h1>"));
}

#[test]
fn test_add_plain_text_extends_span() {
    use crate::util::span::{Position, Span};

    let mut model = model();
    let first = SourceRef::new(
        Span::new(Position::with_offset(1, 1, 0), Position::with_offset(1, 3, 2)),
        "ab",
    );
    let second = SourceRef::new(
        Span::new(Position::with_offset(1, 3, 2), Position::with_offset(2, 3, 5)),
        "\ncd",
    );
    model.add_plain_text("ab", first);
    model.add_plain_text("\ncd", second);

    assert_eq!(model.units().len(), 1);
    let merged = model.unit::<PlainText>(0).unwrap();
    assert_eq!(merged.text(), "ab\ncd");
    assert_eq!(merged.source_ref.text(), "ab\ncd");
    assert_eq!(merged.source_ref.span.start, Position::with_offset(1, 1, 0));
    assert_eq!(merged.source_ref.span.end, Position::with_offset(2, 3, 5));
    assert_eq!(merged.source_ref.span.len(), 5);
}

#[test]
fn test_add_plain_text_without_combining() {
    let mut options = Options::default();
    options.set_combine_adjacent_plain(false);
    let mut model = TemplateModel::new("views", "a.rocker.raw", &options);
    model.add_plain_text("one", at(1));
    model.add_plain_text("two", at(1));
    assert_eq!(model.units().len(), 2);
}

#[test]
fn test_new_copies_options() {
    let defaults = Options::default();
    let first = TemplateModel::new("views", "a.rocker.html", &defaults);
    let second = TemplateModel::new("views", "b.rocker.html", &defaults);

    first.options_mut().set("javaVersion", "11").unwrap();
    assert_eq!(first.options().java_version(), JavaVersion::V11);
    assert_eq!(second.options().java_version(), JavaVersion::V1_8);
    assert_eq!(defaults.java_version(), JavaVersion::V1_8);
    assert!(!first.options_are_shared());
}

#[test]
fn test_shared_options_alias() {
    let shared = Options::default().into_shared();
    let first = TemplateModel::with_shared_options("views", "a.rocker.html", shared.clone());
    let second = TemplateModel::with_shared_options("views", "b.rocker.html", shared.clone());

    first
        .options_mut()
        .parse_option("combineAdjacentPlain=false", &at(1))
        .unwrap();
    assert!(!second.options().combine_adjacent_plain());
    assert!(!shared.read().combine_adjacent_plain());
    assert!(first.options_are_shared());
}

#[test]
fn test_shared_options_guard_released_between_models() {
    let shared = Options::default().into_shared();
    let first = TemplateModel::with_shared_options("views", "a.rocker.html", shared.clone());
    let second = TemplateModel::with_shared_options("views", "b.rocker.html", shared);

    let version = first.options().java_version();
    second.options_mut().set_java_version(JavaVersion::V21);
    assert_eq!(version, JavaVersion::V1_8);
    assert_eq!(first.options().java_version(), JavaVersion::V21);
}

#[test]
fn test_create_plain_text_map() {
    let mut model = model();
    model.add_unit(TemplateUnit::plain_text("HelloWorld", at(1)));
    model.add_unit(TemplateUnit::value("name", at(1)));
    model.add_unit(TemplateUnit::plain_text("HelloWorld", at(2)));
    model.add_unit(TemplateUnit::plain_text("Bye", at(3)));

    let map = model.create_plain_text_map(5);
    assert_eq!(map.len(), 2);
    assert_eq!(map["HelloWorld"]["PLAIN_TEXT_0_0"], "Hello");
    assert_eq!(map["HelloWorld"]["PLAIN_TEXT_0_1"], "World");
    assert_eq!(map["Bye"]["PLAIN_TEXT_1_0"], "Bye");
}

#[test]
fn test_unbalanced_units_detected() {
    let mut model = model();
    model.add_unit(TemplateUnit::for_begin("i : items", at(1)));
    model.add_unit(TemplateUnit::value("i", at(2)));
    assert!(matches!(
        model.validate_structure(),
        Err(StructureError::Unclosed { .. })
    ));
    assert!(model.block_tree().is_err());
}
