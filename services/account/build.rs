use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    tonic_build::configure()
        .build_server(true)
        .build_client(false)
        .file_descriptor_set_path(out_dir.join("bank_account_descriptor.bin"))
        .compile_protos(&["../../proto/bank/account/v1/account.proto"], &["../../proto"])?;

    println!("cargo:rerun-if-changed=../../proto/bank/account/v1/account.proto");
    Ok(())
}
