use std::env;

fn main() {
    embuild::espidf::sysenv::output();

    // Build information for the startup banner
    let ts =
        time_format::strftime_local("%Y-%m-%d %H:%M:%S %Z", time_format::now().unwrap()).unwrap();
    println!("cargo:rustc-env=BUILD_TS={ts}");
    println!(
        "cargo:rustc-env=BUILD_PROFILE={}",
        env::var("PROFILE").unwrap()
    );
}
