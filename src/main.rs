use log::{error, info};
use recipe_finder::{FinderConfig, Mode, PlainTextRenderer, RecipeFinder, Session};
use std::env;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
commands:
  q <text>          set the search text (empty clears it)
  tag <name>        toggle a required tag
  atom <name>       toggle an ingredient atom
  mode <and|or>     how selected atoms combine
  clear             reset all filters
  facets [filter]   list tags and (optionally filtered) atoms
  show              print the current results
  address           print the current address
  quit              exit";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = FinderConfig::load()?;
    let mut builder = RecipeFinder::builder();
    // Address from the command line wins over the configured one
    if let Some(address) = env::args().nth(1) {
        builder = builder.address(address);
    }

    let mut session = match builder.config(&config).build().await {
        Ok(session) => session,
        Err(e) => {
            error!("Initialization halted: {}", e);
            eprintln!(
                "Failed to load recipes data from '{}'. Check that the file or URL is reachable.",
                config.data
            );
            return Err(e.into());
        }
    };
    info!("Session opened at ?{}", session.address());

    show(&session);
    println!("{}", HELP);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let (command, arg) = match line.trim().split_once(' ') {
            Some((command, arg)) => (command, arg.trim()),
            None => (line.trim(), ""),
        };

        match command {
            "" => continue,
            "q" => session.set_query(arg),
            "tag" => session.toggle_tag(arg),
            "atom" => session.toggle_atom(arg),
            "mode" => session.set_mode(Mode::parse(arg)),
            "clear" => session.clear(),
            "facets" => {
                if let Err(e) = print_facets(&session, arg, &mut io::stdout().lock()) {
                    eprintln!("An error occurred while listing facets: {}", e);
                }
                continue;
            }
            "show" => {
                show(&session);
                continue;
            }
            "address" => {
                println!("?{}", session.address());
                continue;
            }
            "quit" | "exit" => break,
            _ => {
                println!("{}", HELP);
                continue;
            }
        }

        println!("?{}", session.address());
        show(&session);
    }

    Ok(())
}

fn show(session: &Session) {
    report_render(session, io::stdout().lock(), &mut io::stderr());
}

/// Render results to `out`; any failure is reported on `err` and the
/// session keeps going. Rendering faults are already logged by the session.
fn report_render<W: Write>(session: &Session, out: W, err: &mut impl Write) {
    let mut renderer = PlainTextRenderer::new(out);
    if let Err(e) = session.render(&mut renderer) {
        let _ = writeln!(err, "An error occurred while rendering recipes: {}", e);
    }
}

fn print_facets(session: &Session, filter: &str, out: &mut impl Write) -> io::Result<()> {
    let facets = session.facets();
    let state = session.state();
    let mark = |selected: bool| if selected { "*" } else { " " };

    writeln!(out, "tags:")?;
    for tag in &facets.tags {
        writeln!(out, " {} {}", mark(state.tags.contains(tag)), tag)?;
    }
    writeln!(out, "atoms ({}):", state.mode)?;
    for atom in facets.atoms_matching(filter) {
        writeln!(out, " {} {}", mark(state.atoms.contains(atom)), atom)?;
    }
    out.flush()
}
