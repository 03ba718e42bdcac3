use async_graphql::{Request, Variables};
use folio::graphql::build_schema;
use serde_json::{Value, json};

async fn execute(query: &str, variables: Value) -> Value {
    let schema = build_schema();
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    response.data.into_json().unwrap()
}

#[tokio::test]
async fn test_sections_in_order() {
    let data = execute("{ sections { id slug label icon } }", json!({})).await;
    let sections = data["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 8);
    assert_eq!(sections[0]["id"], "HOME");
    assert_eq!(sections[0]["slug"], "home");
    assert_eq!(sections[7]["label"], "Contact");
}

#[tokio::test]
async fn test_section_render_tree() {
    let data = execute(
        "query($id: Section!) { section(id: $id) }",
        json!({ "id": "EXPERIENCE" }),
    )
    .await;
    let tree = &data["section"];
    assert_eq!(tree["section"], "experience");
    assert_eq!(tree["blocks"][0]["text"], "Professional Experience");
}

#[tokio::test]
async fn test_charts_include_nested() {
    let data = execute("{ charts(id: PROJECTS) }", json!({})).await;
    let charts = data["charts"].as_array().unwrap();
    assert_eq!(charts.len(), 1);
    assert_eq!(charts[0]["title"], "Project Impact Metrics");
    assert_eq!(charts[0]["categories"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_sections_without_charts() {
    let data = execute("{ charts(id: ABOUT) }", json!({})).await;
    assert_eq!(data["charts"], json!([]));
}

#[tokio::test]
async fn test_footer() {
    let data = execute("{ footer }", json!({})).await;
    assert_eq!(data["footer"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_submit_contact_accepted() {
    let data = execute(
        r#"mutation {
            submitContact(input: { name: "Jane", email: "jane@x.com", subject: GENERAL_INQUIRY, message: "Hi" }) {
                accepted
                message
            }
        }"#,
        json!({}),
    )
    .await;
    assert_eq!(data["submitContact"]["accepted"], true);
    assert_eq!(
        data["submitContact"]["message"],
        folio::contact::ACKNOWLEDGMENT
    );
}

#[tokio::test]
async fn test_submit_contact_rejected_is_payload() {
    let data = execute(
        r#"mutation($input: ContactInput!) { submitContact(input: $input) { accepted message } }"#,
        json!({ "input": { "name": " ", "email": "jane@x.com", "message": "Hi" } }),
    )
    .await;
    assert_eq!(data["submitContact"]["accepted"], false);
    assert_eq!(
        data["submitContact"]["message"],
        "Validation error: Name cannot be empty"
    );
}
