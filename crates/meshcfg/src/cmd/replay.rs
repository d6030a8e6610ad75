use std::fs::File;
use std::io::BufReader;

use meshcfg_proto::ProtobufCodec;
use meshcfg_transport::IoSource;
use tracing::warn;

use crate::cmd::ReplayArgs;
use crate::exit::{io_error, session_error, CliResult, DATA_INVALID, SUCCESS};
use crate::logging::DeviceConsole;
use crate::output::{print_report, OutputFormat};

pub fn run(args: ReplayArgs, format: OutputFormat) -> CliResult<i32> {
    let file = File::open(&args.path).map_err(|err| {
        io_error(&format!("cannot open capture {}", args.path.display()), err)
    })?;
    let source = IoSource::new(BufReader::new(file));
    let mut console = DeviceConsole::new(args.show_debug);

    let report = meshcfg_session::replay(source, &ProtobufCodec, &mut console)
        .map_err(|err| session_error("replay failed", err))?;

    if !report.is_complete() {
        warn!(path = %args.path.display(), "capture ended before configuration completed");
    }
    print_report(&report, format);

    if args.require_complete && !report.is_complete() {
        return Ok(DATA_INVALID);
    }
    Ok(SUCCESS)
}
