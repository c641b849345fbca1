//! Generates `ResponseCodeEnum` from the vendored `proto/response_code.proto`
//! and a `RESPONSE_CODES` list of every `(value, name)` it declares.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use prost::Message;
use prost_types::FileDescriptorSet;

const PROTO: &str = "proto/response_code.proto";
const ENUM_NAME: &str = "ResponseCodeEnum";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed={PROTO}");

    // Use a vendored protoc so contributors/CI don't need a system installation.
    let protoc = protoc_bin_vendored::protoc_bin_path()?;
    env::set_var("PROTOC", protoc);

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let descriptor_path = out_dir.join("response_code.bin");

    prost_build::Config::new()
        .file_descriptor_set_path(&descriptor_path)
        .compile_protos(&[PROTO], &["proto"])?;

    let set = FileDescriptorSet::decode(fs::read(&descriptor_path)?.as_slice())?;
    let values: Vec<(i32, String)> = set
        .file
        .iter()
        .flat_map(|file| file.enum_type.iter())
        .filter(|e| e.name() == ENUM_NAME)
        .flat_map(|e| e.value.iter())
        .map(|v| (v.number(), v.name().to_owned()))
        .collect();
    if values.is_empty() {
        return Err(format!("{PROTO} declares no {ENUM_NAME} values").into());
    }

    let mut out = String::new();
    writeln!(
        out,
        "/// Every `(value, name)` pair of `{ENUM_NAME}`, in declaration order."
    )?;
    writeln!(
        out,
        "pub const RESPONSE_CODES: [(i32, &str); {}] = [",
        values.len()
    )?;
    for (number, name) in &values {
        writeln!(out, "    ({number}, {name:?}),")?;
    }
    writeln!(out, "];")?;
    fs::write(out_dir.join("response_codes.rs"), out)?;

    Ok(())
}
