//! `riff doctor`: check which riff api groups the cluster serves
use std::io::Write;

use riff_client::Clientset;
use tracing::debug;

use crate::{
    cli::Table,
    error::{Error, Result},
};

pub async fn run(c: &Clientset, out: &mut impl Write) -> Result<()> {
    let discovery = c.discovery().run().await?;
    let mut table = Table::new(["GROUP", "STATUS"]);
    for group in riff_core::GROUPS {
        let served = discovery.has_group(group);
        debug!(group, served, "checked api group");
        table.row(vec![group.to_string(), if served { "ok" } else { "missing" }.to_string()]);
    }
    table.write_to(out).map_err(Error::Output)
}
