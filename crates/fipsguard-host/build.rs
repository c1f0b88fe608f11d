use std::env;

fn main() {
    println!("cargo::rustc-check-cfg=cfg(ossl300)");

    // Exported by openssl-sys (links = "openssl") as a hex version number.
    if let Ok(version) = env::var("DEP_OPENSSL_VERSION_NUMBER") {
        let version = u64::from_str_radix(&version, 16).unwrap_or(0);
        if version >= 0x3_00_00_00_0 {
            println!("cargo::rustc-cfg=ossl300");
        }
    }
}
