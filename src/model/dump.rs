//! Human-readable model dump through `tracing`

use tracing::info;

use super::template::TemplateModel;
use super::unit::TemplateUnit;
use crate::util::span::{console_friendly_text, SourceRef};

/// Log identity, imports, arguments and every unit of a model at INFO
pub fn log_model(model: &TemplateModel) {
    info!("--- template model ---");
    info!("template: {}", model.template_name());
    info!("name: {}", model.name());
    info!("package: {}", model.package_name());
    info!("content type: {}", model.content_type());

    for import in model.imports() {
        info!("import: {}", import.statement);
        log_source(&import.source_ref);
    }

    for arg in model.arguments() {
        info!("arg: {} {}", arg.type_name, arg.name);
        log_source(&arg.source_ref);
    }

    for unit in model.units() {
        match unit {
            TemplateUnit::PlainText(plain) => {
                info!("plain: {}", console_friendly_text(&plain.text))
            }
            TemplateUnit::ValueExpression(value) => info!("value: {}", value.expression),
            TemplateUnit::ForBlockBegin(block) => info!("for begin: {}", block.expression),
            TemplateUnit::ForBlockEnd(_) => info!("for end:"),
            TemplateUnit::IfBlockBegin(block) => info!("if begin: {}", block.expression),
            TemplateUnit::ElseBlockBegin(_) => info!("else begin:"),
            TemplateUnit::IfBlockEnd(_) => info!("if end:"),
            TemplateUnit::Option(option) => info!("option: {}", option.statement),
        }
        log_source(unit.source_ref());
    }
}

fn log_source(source_ref: &SourceRef) {
    info!(" src (@ {}): [{}]", source_ref, source_ref.console_friendly_text());
}
