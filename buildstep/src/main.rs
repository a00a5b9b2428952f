use std::process::ExitCode;

use anyhow::Context;
use buildstep_core::{ScriptError, model::Environment};

fn main() -> ExitCode {
    pretty_env_logger::init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        // Script failures carry the fixed exit codes (12 for a failed
        // command, 4 for an unrecognized entry); everything else is a
        // generic failure.
        Err(err) => match err.downcast_ref::<ScriptError>() {
            Some(script_err) => {
                println!("{script_err}");
                ExitCode::from(script_err.exit_code())
            }
            None => {
                eprintln!("{err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn try_main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let script_name = args.next().context("Usage: buildstep <script> [file]")?;
    let path = args.next().unwrap_or_else(default_build_file);

    let mut context = buildstep_core::load(&path).with_context(|| path.clone())?;
    let mut env = Environment::new(context.variables.clone());

    context.run_script(&script_name, &mut env)?;

    Ok(())
}

fn default_build_file() -> String {
    if cfg!(debug_assertions) {
        "buildstep.example.yaml".to_string()
    } else {
        "buildstep.yaml".to_string()
    }
}
