use rand::Rng;
use terminal_contract::{CommandDescriptor, CommandName};

use super::entry;
use crate::{
    content,
    markup,
    registry::{CommandContext, CommandHandler},
};

const MATRIX_ROWS: usize = 5;
const MATRIX_COLUMNS: usize = 50;

pub(super) fn registrations() -> Vec<(CommandDescriptor, CommandHandler)> {
    vec![
        entry(
            CommandDescriptor::new(CommandName::Weather, "Check the weather").hidden(),
            weather,
        ),
        entry(
            CommandDescriptor::new(CommandName::Coffee, "Get some virtual coffee ☕"),
            coffee,
        ),
        entry(
            CommandDescriptor::new(CommandName::Joke, "Hear a programming joke"),
            joke,
        ),
        entry(
            CommandDescriptor::new(CommandName::Matrix, "Enter the Matrix (warning: cool)"),
            matrix,
        ),
        entry(
            CommandDescriptor::new(CommandName::Sudo, "Run a command as root")
                .with_min_args(1, "sudo: no command specified")
                .hidden(),
            sudo,
        ),
    ]
}

fn weather(ctx: &mut CommandContext<'_>) {
    ctx.print("Checking weather...");
    let forecast = ctx.choose(&content::FORECASTS);
    ctx.later(
        1000,
        vec![
            forecast.to_string(),
            markup::comment("// Weather report accuracy: 0% guaranteed"),
        ],
    );
}

fn joke(ctx: &mut CommandContext<'_>) {
    ctx.print("Loading humor module...");
    let joke = ctx.choose(&content::JOKES);
    ctx.later(
        1500,
        vec![
            joke.to_string(),
            markup::comment("// Comedy.exe has stopped working"),
        ],
    );
}

fn matrix(ctx: &mut CommandContext<'_>) {
    ctx.print("Entering the Matrix...");
    ctx.comment("// There is no spoon... only semicolons 🥄");

    let rng = ctx.rng();
    let mut rain = String::with_capacity(MATRIX_ROWS * (MATRIX_COLUMNS + 1));
    for _ in 0..MATRIX_ROWS {
        for _ in 0..MATRIX_COLUMNS {
            rain.push(if rng.random_bool(0.5) { '1' } else { '0' });
        }
        rain.push('\n');
    }

    ctx.later(
        2000,
        vec![
            format!(r#"<pre class="matrix">{rain}</pre>"#),
            "🕶️".to_string(),
            markup::comment("//"),
        ],
    );
}

fn coffee(ctx: &mut CommandContext<'_>) {
    ctx.print(content::COFFEE_ART);
}

fn sudo(ctx: &mut CommandContext<'_>) {
    let line = ctx.choose(&content::SUDO_RESPONSES);
    ctx.print(line);
    ctx.comment("// Pro tip: 'sudo' doesn't work on personality issues either");
}
