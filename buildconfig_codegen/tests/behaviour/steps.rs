//! Steps building snapshots and inspecting the generated module.

use crate::fixtures::GeneratorContext;
use anyhow::{Context, Result, anyhow, ensure};
use buildconfig_codegen::escape::unescape;
use buildconfig_codegen::{ConfigSnapshot, render};
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::{
    array_constant_len, bool_constant, count_occurrences, string_constant_body, unquote,
};

fn update_snapshot(
    generator_context: &GeneratorContext,
    update: impl FnOnce(ConfigSnapshot) -> ConfigSnapshot,
) -> Result<()> {
    let snapshot = generator_context
        .snapshot
        .take()
        .ok_or_else(|| anyhow!("snapshot missing"))?;
    generator_context.snapshot.set(update(snapshot));
    Ok(())
}

fn module(generator_context: &GeneratorContext) -> Result<String> {
    generator_context
        .module
        .with_ref(Clone::clone)
        .ok_or_else(|| anyhow!("module has not been generated"))
}

#[given("a snapshot rooted at {objdir} and {srcdir}")]
fn snapshot_rooted_at(
    generator_context: &GeneratorContext,
    objdir: String,
    srcdir: String,
) -> Result<()> {
    generator_context
        .snapshot
        .set(ConfigSnapshot::new(unquote(&objdir), unquote(&srcdir)));
    Ok(())
}

#[given("the variable {name} is set to {value}")]
fn variable_is_set(
    generator_context: &GeneratorContext,
    name: String,
    value: String,
) -> Result<()> {
    update_snapshot(generator_context, |snapshot| snapshot.with(name, unquote(&value)))
}

#[given("the list {name} contains {items}")]
fn list_contains(generator_context: &GeneratorContext, name: String, items: String) -> Result<()> {
    let values: Vec<String> = unquote(&items).split(',').map(str::to_owned).collect();
    update_snapshot(generator_context, |snapshot| snapshot.with(name, values))
}

#[when("the module is generated")]
fn generate_module(generator_context: &GeneratorContext) -> Result<()> {
    let rendered = generator_context
        .snapshot
        .with_ref(render)
        .ok_or_else(|| anyhow!("snapshot missing"))?;
    if let Some(previous) = generator_context.module.take() {
        generator_context.previous_module.set(previous);
    }
    generator_context.module.set(rendered);
    Ok(())
}

#[when("the module is generated again")]
fn generate_module_again(generator_context: &GeneratorContext) -> Result<()> {
    ensure!(
        !generator_context.module.is_empty(),
        "module must be generated once before regenerating"
    );
    generate_module(generator_context)
}

#[then("the string constant {name} decodes to {expected}")]
fn string_constant_decodes(
    generator_context: &GeneratorContext,
    name: String,
    expected: String,
) -> Result<()> {
    let rendered = module(generator_context)?;
    let body = string_constant_body(&rendered, &name)
        .ok_or_else(|| anyhow!("string constant {name} missing"))?;
    let decoded = unescape(body).with_context(|| format!("decode {name}"))?;
    let wanted = unquote(&expected);
    ensure!(decoded == wanted, "{name} decoded to {decoded:?}, expected {wanted:?}");
    Ok(())
}

#[then("the boolean constant {name} is {state}")]
fn boolean_constant_is(
    generator_context: &GeneratorContext,
    name: String,
    state: String,
) -> Result<()> {
    let expected: bool = state.parse().with_context(|| format!("parse {state}"))?;
    let actual = bool_constant(&module(generator_context)?, &name)
        .ok_or_else(|| anyhow!("boolean constant {name} missing"))?;
    ensure!(actual == expected, "{name} is {actual}, expected {expected}");
    Ok(())
}

#[then("the array constant {name} has {count} elements")]
fn array_constant_has(
    generator_context: &GeneratorContext,
    name: String,
    count: String,
) -> Result<()> {
    let expected: usize = count.parse().with_context(|| format!("parse {count}"))?;
    let actual = array_constant_len(&module(generator_context)?, &name)
        .ok_or_else(|| anyhow!("array constant {name} missing"))?;
    ensure!(actual == expected, "{name} has {actual} elements, expected {expected}");
    Ok(())
}

#[then("the module contains {text}")]
fn module_contains(generator_context: &GeneratorContext, text: String) -> Result<()> {
    let needle = unquote(&text);
    ensure!(
        module(generator_context)?.contains(needle),
        "module does not contain {needle}"
    );
    Ok(())
}

#[then("the module defines {count} macro templates")]
fn module_defines_templates(generator_context: &GeneratorContext, count: String) -> Result<()> {
    let expected: usize = count.parse().with_context(|| format!("parse {count}"))?;
    let rendered = module(generator_context)?;
    let templates = count_occurrences(&rendered, "macro_rules! ");
    let exports = count_occurrences(&rendered, "#[macro_export]");
    ensure!(
        templates == expected && exports == expected,
        "found {templates} templates and {exports} exports, expected {expected}"
    );
    Ok(())
}

#[then("both renderings are identical")]
fn renderings_identical(generator_context: &GeneratorContext) -> Result<()> {
    let previous = generator_context
        .previous_module
        .take()
        .ok_or_else(|| anyhow!("first rendering missing"))?;
    ensure!(previous == module(generator_context)?, "renderings differ");
    Ok(())
}
