use crate::Project;

#[test]
fn test_project_json_field_names() {
    let project = Project {
        id: 7,
        project_name: "Apollo".to_string(),
        project_owner: "Alice".to_string(),
    };

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["project_name"], "Apollo");
    assert_eq!(json["project_owner"], "Alice");
}

#[test]
fn test_project_deserializes_from_wire_shape() {
    let project: Project =
        serde_json::from_str(r#"{"id": 3, "project_name": "Gemini", "project_owner": "Bob"}"#)
            .unwrap();

    assert_eq!(project.id, 3);
    assert_eq!(project.project_name, "Gemini");
    assert_eq!(project.project_owner, "Bob");
}
