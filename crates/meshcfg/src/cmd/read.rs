use meshcfg_proto::ProtobufCodec;
use meshcfg_session::{Session, SessionConfig};
use meshcfg_transport::{SerialConfig, SerialLink};
use tracing::warn;

use crate::cmd::{parse_duration, ReadArgs};
use crate::exit::{
    session_error, transport_error, CliError, CliResult, INTERNAL, INTERRUPTED, SUCCESS, TIMEOUT,
    USAGE,
};
use crate::logging::DeviceConsole;
use crate::output::{print_report, OutputFormat};

pub fn run(args: ReadArgs, format: OutputFormat) -> CliResult<i32> {
    let deadline = parse_duration("timeout", &args.timeout)?;
    if deadline.is_zero() {
        return Err(CliError::new(USAGE, "timeout must be greater than zero"));
    }
    let settle = parse_duration("settle", &args.settle)?;

    let serial = SerialConfig {
        baud_rate: args.baud,
        ..SerialConfig::new(&args.port)
    };
    let (source, sink) = SerialLink::open(&serial)
        .map_err(|err| transport_error("open failed", err))?
        .split();

    let session = Session::new(
        SessionConfig {
            deadline,
            settle,
            send_wake: !args.no_wake,
            ..SessionConfig::default()
        },
        ProtobufCodec,
    );
    let mut console = DeviceConsole::new(args.show_debug);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| CliError::new(INTERNAL, format!("runtime setup failed: {err}")))?;

    let report = runtime.block_on(async {
        tokio::select! {
            result = session.run(source, sink, &mut console) => {
                result.map_err(|err| session_error("session failed", err))
            }
            Ok(()) = tokio::signal::ctrl_c() => {
                Err(CliError::new(INTERRUPTED, "interrupted"))
            }
        }
    })?;

    if !report.is_complete() {
        warn!(port = %args.port, "timed out waiting for device configuration");
    }
    print_report(&report, format);

    if args.require_complete && !report.is_complete() {
        return Ok(TIMEOUT);
    }
    Ok(SUCCESS)
}
