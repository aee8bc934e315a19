use super::*;

fn user(name: &str, role: Role) -> User {
    User { email: format!("{}@fiea.org.br", name.to_lowercase()), name: name.to_owned(), role }
}

#[test]
fn groups_follow_role_order_and_sort_by_name() {
    let users = vec![user("Zeca", Role::Manager), user("Bia", Role::Admin), user("Ana", Role::Manager)];
    let groups = group_by_role(&users);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, Role::Admin);
    assert_eq!(groups[1].0, Role::Manager);
    let managers: Vec<&str> = groups[1].1.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(managers, ["Ana", "Zeca"]);
}

#[test]
fn empty_roles_are_omitted() {
    let groups = group_by_role(&[user("Ana", Role::Manager)]);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].0, Role::Manager);
    assert!(group_by_role(&[]).is_empty());
}
