use std::fmt;

use crate::gitlab::{Event, TAG_REF_PREFIX};

pub const UNHANDLED: &str = "Unhandled event type";

/// Discord markdown rendering of a GitLab event.
#[derive(Debug, Clone, Copy)]
pub struct Message<'a>(pub &'a Event);

impl fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Event::Push {
                actor,
                project,
                reference,
                commits,
                after,
            } => {
                if let Some(tag) = reference.strip_prefix(TAG_REF_PREFIX) {
                    write!(
                        f,
                        "**{}** pushed a new tag **{}** in **{}**:\n\n",
                        actor.name, tag, project.name
                    )?;
                    return writeln!(f, "🔗 **View tag**: <{}/tags/{}>", project.web_url, tag);
                }

                write!(
                    f,
                    "**{}** pushed to branch **{}** in **{}**:\n\n",
                    actor.name, reference, project.name
                )?;
                for commit in commits {
                    writeln!(f, "• **Commit ID**: {}", commit.id)?;
                    // Commit authors carry no avatar in push payloads, the pusher's is used.
                    writeln!(
                        f,
                        "  _by {}_ ![avatar]({})",
                        commit.author.name, actor.avatar_url
                    )?;
                    writeln!(f, "  [Commit URL]({})", commit.url)?;
                    writeln!(f, "  ```\n{}\n```", commit.message)?;
                }
                writeln!(
                    f,
                    "🔗 **View changes**: <{}/commits/{}>",
                    project.web_url, after
                )
            }
            Event::MergeRequest {
                actor,
                project,
                merge_request,
            } => {
                writeln!(
                    f,
                    "**Merge Request**: **{}** in **{}**",
                    merge_request.title, project.name
                )?;
                writeln!(f, "State: **{}**", merge_request.state)?;
                writeln!(
                    f,
                    "Author: _{}_ ![avatar]({})",
                    merge_request.author.name, actor.avatar_url
                )?;
                writeln!(f, "🔗 **View Merge Request**: <{}>", merge_request.url)
            }
            Event::RepositoryUpdate { actor, project } => {
                writeln!(f, "**Repository** **{}** was updated:", project.name)?;
                writeln!(
                    f,
                    "Updated by _{}_ ![avatar]({})",
                    actor.name, actor.avatar_url
                )?;
                writeln!(f, "🔗 **View Repository**: <{}>", project.web_url)
            }
            Event::Unknown => f.write_str(UNHANDLED),
        }
    }
}

pub fn render(event: &Event) -> String {
    Message(event).to_string()
}
