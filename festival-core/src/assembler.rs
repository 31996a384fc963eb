// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Assembly of the greetings sent and received by an account into view-models.
//!
//! The two id lists read from the ledger may contain duplicates and may overlap. A
//! greeting that appears in both lists is shown as sent only. Records are fetched
//! concurrently within each list, and a record that fails to resolve is left out of
//! its list without affecting the others.

use std::collections::BTreeSet;

use festival_base::{
    catalog::DesignCatalog,
    data_types::{DesignRef, GreetingRecord, GreetingViewModel, ImageSource},
    identifiers::{Address, TokenId},
    metadata,
    template::{self, TemplateValues},
};
use festival_ledger::LedgerError;
use futures::{stream, StreamExt as _};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::context::{AssemblyPolicy, GreetingsContext};

/// The label shown for greetings carrying their own artwork.
pub const CUSTOM_DESIGN_LABEL: &str = "Custom";

/// The greetings of one account, ready for display.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GreetingViews {
    pub sent: Vec<GreetingViewModel>,
    pub received: Vec<GreetingViewModel>,
}

impl GreetingViews {
    pub fn is_empty(&self) -> bool {
        self.sent.is_empty() && self.received.is_empty()
    }

    /// The view-model of `id`, whichever list it is in.
    pub fn find(&self, id: TokenId) -> Option<&GreetingViewModel> {
        self.sent
            .iter()
            .chain(&self.received)
            .find(|view| view.token_id == id)
    }
}

/// Removes repeated ids, keeping the first occurrence of each.
pub fn dedupe(ids: &[TokenId]) -> Vec<TokenId> {
    let mut seen = BTreeSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

/// Splits two id lists into the unique sent ids and the unique received ids that were
/// not also sent.
pub fn partition(sent: &[TokenId], received: &[TokenId]) -> (Vec<TokenId>, Vec<TokenId>) {
    let unique_sent = dedupe(sent);
    let sent_set = unique_sent.iter().copied().collect::<BTreeSet<_>>();
    let unique_received = dedupe(received)
        .into_iter()
        .filter(|id| !sent_set.contains(id))
        .collect();
    (unique_sent, unique_received)
}

/// Reads both id lists of `account` and assembles their greetings.
///
/// If either list cannot be read, both views are empty.
#[instrument(skip(context))]
pub async fn assemble_for_account(context: &GreetingsContext, account: Address) -> GreetingViews {
    let (sent, received) = futures::join!(
        context.ledger.ids_sent_by(account),
        context.ledger.ids_received_by(account)
    );
    match (sent, received) {
        (Ok(sent), Ok(received)) => assemble(context, &sent, &received).await,
        (Err(error), _) | (_, Err(error)) => {
            warn!("Failed to read the greetings of {account}: {error}");
            GreetingViews::default()
        }
    }
}

/// Fetches and assembles the greetings of the given id lists.
///
/// Each view keeps the order of the de-duplicated ids it was built from.
pub async fn assemble(
    context: &GreetingsContext,
    sent_ids: &[TokenId],
    received_ids: &[TokenId],
) -> GreetingViews {
    let (sent, received) = partition(sent_ids, received_ids);
    let (sent, received) = futures::join!(
        assemble_list(context, &sent),
        assemble_list(context, &received)
    );
    GreetingViews { sent, received }
}

async fn assemble_list(context: &GreetingsContext, ids: &[TokenId]) -> Vec<GreetingViewModel> {
    if ids.is_empty() {
        return Vec::new();
    }
    let mut views = stream::iter(ids.iter().copied().enumerate())
        .map(|(index, id)| async move { (index, id, fetch_view(context, id).await) })
        .buffer_unordered(context.options.max_concurrent_fetches.max(1))
        .filter_map(|(index, id, result)| async move {
            match result {
                Ok(view) => Some((index, view)),
                Err(error) => {
                    debug!("Dropping greeting {id}: {error}");
                    None
                }
            }
        })
        .collect::<Vec<_>>()
        .await;
    views.sort_unstable_by_key(|(index, _)| *index);
    views.into_iter().map(|(_, view)| view).collect()
}

async fn fetch_view(
    context: &GreetingsContext,
    id: TokenId,
) -> Result<GreetingViewModel, LedgerError> {
    if context.options.policy == AssemblyPolicy::ExistenceChecked {
        context.ledger.token_owner(id).await?;
    }
    let record = context.ledger.record(id).await?;
    let gateway = &context.options.ipfs_gateway;
    let image = match metadata::resolve_image(&record.image_ref, gateway) {
        Some(image) => Some(image),
        None => match metadata_image(context, id).await {
            Some(image) => Some(image),
            None => design_image(context.catalog, &record, gateway),
        },
    };
    Ok(view_model(context.catalog, record, image))
}

/// The image announced by the metadata URI of `id`. Failures only lose the image.
async fn metadata_image(context: &GreetingsContext, id: TokenId) -> Option<ImageSource> {
    let uri = match context.ledger.token_metadata_uri(id).await {
        Ok(uri) => uri?,
        Err(error) => {
            debug!("Failed to read the metadata URI of {id}: {error}");
            return None;
        }
    };
    match metadata::decode_token_uri(&uri) {
        Ok(image) => metadata::resolve_image(&image?, &context.options.ipfs_gateway),
        Err(error) => {
            debug!("Ignoring the metadata of {id}: {error}");
            None
        }
    }
}

/// The artwork a record's design reference points to.
fn design_image(
    catalog: &DesignCatalog,
    record: &GreetingRecord,
    gateway: &str,
) -> Option<ImageSource> {
    match &record.design_ref {
        DesignRef::Catalog(id) => {
            let design = catalog.get(*id).ok()?;
            let values = TemplateValues {
                festival: Some(&record.festival),
                message: Some(&record.message),
                date: None,
            };
            Some(ImageSource::InlineSvg(template::render(
                design.svg_template,
                &values,
            )))
        }
        DesignRef::Image(image) => metadata::resolve_image(image, gateway),
    }
}

/// The label describing the design of a greeting.
pub fn design_label(catalog: &DesignCatalog, design_ref: &DesignRef) -> String {
    match design_ref {
        DesignRef::Catalog(id) => match catalog.get(*id) {
            Ok(design) => design.name.to_string(),
            Err(_) => format!("Design #{id}"),
        },
        DesignRef::Image(_) => CUSTOM_DESIGN_LABEL.to_string(),
    }
}

fn view_model(
    catalog: &DesignCatalog,
    record: GreetingRecord,
    image: Option<ImageSource>,
) -> GreetingViewModel {
    GreetingViewModel {
        design_label: design_label(catalog, &record.design_ref),
        token_id: record.token_id,
        festival: record.festival,
        message: record.message,
        image,
        sender: record.sender,
    }
}

#[cfg(test)]
#[path = "unit_tests/assembler_tests.rs"]
mod assembler_tests;
