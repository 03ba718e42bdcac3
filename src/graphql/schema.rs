use async_graphql::{EmptySubscription, Json, Object, Schema};

use crate::contact::{ContactForm, FormStatus};
use crate::model::{self, ChartSpec};
use crate::render::RenderTree;
use crate::{content, router};

use super::types::*;

pub type FolioSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema() -> FolioSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription).finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All sections in sidebar order
    async fn sections(&self) -> Vec<SectionInfo> {
        model::Section::ALL.into_iter().map(Into::into).collect()
    }

    /// Render tree of a single section
    async fn section(&self, id: Section) -> Json<RenderTree> {
        Json(router::render(id.into(), &FormStatus::Idle))
    }

    /// Chart specifications used by a section, including nested ones
    async fn charts(&self, id: Section) -> Json<Vec<ChartSpec>> {
        let tree = router::render(id.into(), &FormStatus::Idle);
        Json(tree.charts().into_iter().cloned().collect())
    }

    /// Page footer lines
    async fn footer(&self) -> Vec<String> {
        content::FOOTER.iter().map(|l| l.to_string()).collect()
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Validate a contact message and acknowledge it. Nothing is stored or sent.
    async fn submit_contact(&self, input: ContactInput) -> ContactReceipt {
        let mut form: ContactForm = input.into();
        match form.submit() {
            Ok(ack) => ContactReceipt {
                accepted: true,
                message: ack.message.to_string(),
            },
            Err(err) => ContactReceipt {
                accepted: false,
                message: err.to_string(),
            },
        }
    }
}
