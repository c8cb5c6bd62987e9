use terminal_contract::{CommandDescriptor, CommandName};

use super::{entry, staged, Note};
use crate::{
    content,
    registry::{CommandContext, CommandHandler},
};

pub(super) fn registrations() -> Vec<(CommandDescriptor, CommandHandler)> {
    vec![
        entry(
            CommandDescriptor::new(CommandName::About, "Learn more about me"),
            about,
        ),
        entry(
            CommandDescriptor::new(CommandName::Skills, "View my technical skills"),
            skills,
        ),
        entry(
            CommandDescriptor::new(CommandName::Experience, "Check out my work experience"),
            experience,
        ),
        entry(
            CommandDescriptor::new(CommandName::Projects, "See my projects and awards I got"),
            projects,
        ),
        entry(
            CommandDescriptor::new(CommandName::Education, "My educational background"),
            education,
        ),
        entry(
            CommandDescriptor::new(CommandName::Contact, "Get in touch with me"),
            contact,
        ),
        entry(
            CommandDescriptor::new(CommandName::Links, "My social media and websites"),
            links,
        ),
    ]
}

fn about(ctx: &mut CommandContext<'_>) {
    staged(ctx, "Fetching personal data...", Note::Flavor, 1500, content::ABOUT);
}

fn skills(ctx: &mut CommandContext<'_>) {
    staged(
        ctx,
        "Loading skill tree...",
        Note::Fixed("// Calculating years of Stack Overflow dependency..."),
        2000,
        content::SKILLS,
    );
}

fn experience(ctx: &mut CommandContext<'_>) {
    staged(
        ctx,
        "Accessing work history database...",
        Note::Flavor,
        2000,
        content::EXPERIENCE,
    );
}

fn projects(ctx: &mut CommandContext<'_>) {
    staged(
        ctx,
        "Compiling project portfolio...",
        Note::Fixed("// Warning: May contain traces of caffeine and late nights"),
        2500,
        content::PROJECTS,
    );
}

fn education(ctx: &mut CommandContext<'_>) {
    staged(
        ctx,
        "Retrieving academic records...",
        Note::Fixed("// GPA loading... please don't judge 📚"),
        1800,
        content::EDUCATION,
    );
}

fn contact(ctx: &mut CommandContext<'_>) {
    staged(
        ctx,
        "Establishing secure connection...",
        Note::Fixed("// Encryption level: Friendship 🤝"),
        1500,
        content::CONTACT,
    );
}

fn links(ctx: &mut CommandContext<'_>) {
    staged(
        ctx,
        "Fetching social media presence...",
        Note::Fixed("// Loading professional internet identity..."),
        1200,
        content::LINKS,
    );
}
