#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use clap::Parser;
use crossterm::tty::IsTty;

use pyre::context::Context;

mod misc;
mod parse_args;

use misc::{read_file, read_lines, Source};
use parse_args::{config_from_args, Args};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Args>();
        return;
    }

    let mut the_context = Context::from_config(config_from_args(&args));

    for path in &args.paths {
        if let Err(e) = read_file(&mut the_context, path) {
            misc::error(format!("Failed to read {path:?}: {e}"));
            std::process::exit(1);
        }
    }

    if !args.no_stdin {
        let stdin = std::io::stdin();
        let source = match stdin.is_tty() && !args.quiet {
            true => Source::Terminal,
            false => Source::File,
        };
        read_lines(&mut the_context, stdin.lock(), source);
    }
}
