use crate::domain::auth::{CreateUserParams, UserDirectoryPort};
use crate::domain::workbench::{
    CreateProjectStoreParams, CreateTaskStoreParams, ProjectStatus, StoreRepository, TaskPriority,
    TaskStatus,
};
use crate::outbound::store::error::Error;
use crate::outbound::store::memory::MemoryRepository;
use time::{Duration, OffsetDateTime};

/// Loads the demo data set: three users, five projects in various states and
/// a kanban-ready spread of tasks on the first project.
pub async fn seed_demo_data(repo: &MemoryRepository) -> Result<(), Error> {
    let john = repo
        .create_user(CreateUserParams {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            avatar_url: None,
        })
        .await?;
    let jane = repo
        .create_user(CreateUserParams {
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            avatar_url: None,
        })
        .await?;
    let mike = repo
        .create_user(CreateUserParams {
            name: "Mike Johnson".to_string(),
            email: "mike@example.com".to_string(),
            avatar_url: None,
        })
        .await?;

    let now = OffsetDateTime::now_utc();
    let in_days = |days: i64| Some(now + Duration::days(days));

    let website = repo
        .create_project(CreateProjectStoreParams {
            name: "Website Redesign".to_string(),
            description: "Complete redesign of the company website with modern UI/UX".to_string(),
            status: ProjectStatus::Active,
            progress: 75,
            member_ids: vec![john.id, jane.id],
            due_date: in_days(45),
        })
        .await?;
    repo.create_project(CreateProjectStoreParams {
        name: "Mobile App Development".to_string(),
        description: "Native iOS and Android app for customer engagement".to_string(),
        status: ProjectStatus::Active,
        progress: 45,
        member_ids: vec![jane.id, mike.id],
        due_date: in_days(90),
    })
    .await?;
    repo.create_project(CreateProjectStoreParams {
        name: "Database Migration".to_string(),
        description: "Migrate from legacy database to cloud solution".to_string(),
        status: ProjectStatus::Active,
        progress: 90,
        member_ids: vec![john.id, mike.id],
        due_date: in_days(14),
    })
    .await?;
    repo.create_project(CreateProjectStoreParams {
        name: "Marketing Campaign".to_string(),
        description: "Q4 digital marketing campaign planning and execution".to_string(),
        status: ProjectStatus::Completed,
        progress: 100,
        member_ids: vec![jane.id],
        due_date: in_days(-30),
    })
    .await?;
    repo.create_project(CreateProjectStoreParams {
        name: "API Documentation".to_string(),
        description: "Comprehensive API documentation for developers".to_string(),
        status: ProjectStatus::OnHold,
        progress: 20,
        member_ids: vec![john.id],
        due_date: in_days(60),
    })
    .await?;

    repo.create_task(CreateTaskStoreParams {
        title: "Design Homepage Layout".to_string(),
        description: "Create wireframes and mockups for the new homepage".to_string(),
        project_id: website.id,
        status: TaskStatus::Done,
        priority: TaskPriority::High,
        assignee_id: Some(jane.id),
        due_date: in_days(-10),
    })
    .await?;
    repo.create_task(CreateTaskStoreParams {
        title: "Implement Authentication".to_string(),
        description: "Set up user authentication system with JWT".to_string(),
        project_id: website.id,
        status: TaskStatus::InProgress,
        priority: TaskPriority::High,
        assignee_id: Some(john.id),
        due_date: in_days(-2),
    })
    .await?;
    repo.create_task(CreateTaskStoreParams {
        title: "Setup CI/CD Pipeline".to_string(),
        description: "Configure automated testing and deployment".to_string(),
        project_id: website.id,
        status: TaskStatus::Todo,
        priority: TaskPriority::Medium,
        assignee_id: Some(mike.id),
        due_date: in_days(21),
    })
    .await?;
    repo.create_task(CreateTaskStoreParams {
        title: "Write Content".to_string(),
        description: "Draft copy for the main landing pages".to_string(),
        project_id: website.id,
        status: TaskStatus::Todo,
        priority: TaskPriority::Low,
        assignee_id: None,
        due_date: None,
    })
    .await?;

    Ok(())
}
