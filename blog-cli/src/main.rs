use blog_client::{BlogClient, NewPost, Post, PostUpdate};
use chrono::{DateTime, Utc};
use clap::Parser;
use uuid::Uuid;

#[derive(Parser, Debug)]
struct Cli {
    #[clap(short, long, default_value = "http://127.0.0.1:8080")]
    server: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    ListPosts,
    GetPost {
        #[clap(long)]
        id: Uuid,
    },
    CreatePost {
        #[clap(long)]
        title: String,
        #[clap(long)]
        content: String,
        #[clap(long)]
        author: String,
        #[clap(long)]
        publish_date: Option<DateTime<Utc>>,
    },
    UpdatePost {
        #[clap(long)]
        id: Uuid,
        #[clap(long)]
        title: Option<String>,
        #[clap(long)]
        content: Option<String>,
        #[clap(long)]
        author: Option<String>,
        #[clap(long)]
        publish_date: Option<DateTime<Utc>>,
    },
    DeletePost {
        #[clap(long)]
        id: Uuid,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = BlogClient::new(&cli.server)?;

    match cli.command {
        Command::ListPosts => {
            for post in client.list_posts().await? {
                print_post(&post);
            }
        }
        Command::GetPost { id } => {
            print_post(&client.get_post(id).await?);
        }
        Command::CreatePost {
            title,
            content,
            author,
            publish_date,
        } => {
            let post = client
                .create_post(NewPost {
                    title,
                    content,
                    author,
                    publish_date,
                })
                .await?;
            println!("created {}", post.id);
        }
        Command::UpdatePost {
            id,
            title,
            content,
            author,
            publish_date,
        } => {
            let post = client
                .update_post(
                    id,
                    PostUpdate {
                        title,
                        content,
                        author,
                        publish_date,
                    },
                )
                .await?;
            print_post(&post);
        }
        Command::DeletePost { id } => {
            client.delete_post(id).await?;
            println!("deleted {}", id);
        }
    }

    Ok(())
}

fn print_post(post: &Post) {
    println!(
        "{} | {} | {} | {}",
        post.id,
        post.publish_date.format("%Y-%m-%d"),
        post.author,
        post.title
    );
    println!("    {}", post.content);
}
