use jiff::civil::date;
use server::{
    Latency, Services,
    storage::{Seed, Store},
};
use types::{
    Entry, ErrorKind, Id,
    attendance::{AttendanceRecord, AttendanceStatus},
    employee::{Address, Employee, EmployeeStatus},
    leave::LeaveStatus,
};

fn employee(first: &str, last: &str) -> Employee {
    Employee {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@company.com", first.to_lowercase(), last.to_lowercase()),
        phone: "+1 (555) 000-0000".to_string(),
        department_id: Id::new(1),
        role_id: Id::new(1),
        status: EmployeeStatus::Active,
        address: Address::default(),
        join_date: date(2024, 1, 15),
        photo_url: None,
    }
}

fn two_employees() -> Services {
    let seed = Seed {
        employees: vec![
            Entry::new(Id::new(1), employee("Ada", "Lovelace")),
            Entry::new(Id::new(2), employee("Alan", "Turing")),
        ],
        ..Seed::default()
    };
    Services::new(&Store::from_seed(seed).unwrap(), Latency::none())
}

#[tokio::test]
async fn created_employee_is_immediately_visible() {
    let services = two_employees();

    let created = services.employees.create(employee("A", "B")).await.unwrap();
    assert_eq!(created.id, Id::new(3));

    let all = services.employees.get_all().await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.contains(&created));
}

#[tokio::test]
async fn invalid_employee_is_not_stored() {
    let services = two_employees();

    let mut invalid = employee("A", "B");
    invalid.email = "not-an-email".to_string();
    let err = services.employees.create(invalid).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Invalid);
    assert!(err.message.contains("Email is invalid"));

    assert_eq!(services.employees.get_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn update_of_missing_employee_leaves_collection_unchanged() {
    let services = two_employees();
    let before = services.employees.get_all().await.unwrap();

    let err = services
        .employees
        .update(Id::new(99), employee("X", "Y"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    assert_eq!(services.employees.get_all().await.unwrap(), before);
}

#[tokio::test]
async fn second_delete_is_not_found() {
    let services = two_employees();

    services.employees.delete(Id::new(2)).await.unwrap();
    let err = services.employees.delete(Id::new(2)).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn ids_are_never_reused() {
    let services = two_employees();

    services.employees.delete(Id::new(2)).await.unwrap();
    let created = services.employees.create(employee("Grace", "Hopper")).await.unwrap();
    assert_eq!(created.id, Id::new(3));
}

#[tokio::test]
async fn first_record_in_empty_collection_gets_id_one() {
    let services = Services::new(&Store::empty(), Latency::none());

    let record = AttendanceRecord {
        employee_id: Id::new(1),
        date: date(2024, 1, 15),
        status: AttendanceStatus::Absent,
        check_in: None,
        check_out: None,
    };
    let created = services.attendance.create(record).await.unwrap();
    assert_eq!(created.id, Id::new(1));
}

#[tokio::test]
async fn seeded_leave_request_can_be_rejected_once() {
    let services = Services::new(&Store::seeded().unwrap(), Latency::none());

    let rejected = services.leave.reject(Id::new(5), Id::new(7)).await.unwrap();
    assert_eq!(rejected.status, LeaveStatus::Rejected);
    assert_eq!(rejected.approved_by, Some(Id::new(7)));

    let err = services
        .leave
        .approve(Id::new(5), Id::new(1))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[tokio::test]
async fn attendance_range_is_inclusive() {
    let services = Services::new(&Store::seeded().unwrap(), Latency::none());

    let records = services
        .attendance
        .get_by_date_range(date(2024, 1, 16), date(2024, 1, 17))
        .await
        .unwrap();
    assert!(!records.is_empty());
    assert!(
        records
            .iter()
            .all(|r| r.date == date(2024, 1, 16) || r.date == date(2024, 1, 17))
    );
}

#[tokio::test]
async fn stores_are_isolated() {
    let first = Services::new(&Store::seeded().unwrap(), Latency::none());
    let second = Services::new(&Store::seeded().unwrap(), Latency::none());

    first.employees.delete(Id::new(1)).await.unwrap();
    assert!(second.employees.get_by_id(Id::new(1)).await.is_ok());
}

#[tokio::test]
async fn directory_joins_department_and_role_names() {
    let services = Services::new(&Store::seeded().unwrap(), Latency::none());

    let directory = services.employee_directory().await.unwrap();
    let john = directory
        .views()
        .into_iter()
        .find(|view| view.entry.id == Id::new(1))
        .unwrap();
    assert_eq!(john.department, "Engineering");
    assert_eq!(john.role, "Engineering Manager");
}
