use meshcfg_frame::{MAX_FRAME_SIZE, WAKE_LEN};
use meshcfg_proto::WANT_CONFIG_ID;

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("meshcfg {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: meshcfg");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}",
        option_env!("MESHCFG_BUILD_TARGET").unwrap_or("unknown")
    );
    println!(
        "rustc: {}",
        option_env!("RUSTC_VERSION").unwrap_or("unknown")
    );
    println!("git_hash: {}", option_env!("GIT_HASH").unwrap_or("unknown"));
    println!(
        "protocol: max_frame={MAX_FRAME_SIZE} wake_len={WAKE_LEN} want_config_id={WANT_CONFIG_ID}"
    );

    Ok(SUCCESS)
}
