use std::sync::Arc;

use async_trait::async_trait;
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{
    Command, CreateUser, CredentialsStatus, Email, Event, Message, Password,
    UpdateCredentialsStatus, User, UserProfile,
};
use service::{
    BusFactory, EventProducer, InMemoryBusFactory, InMemoryUserStore, InMemoryUserUnitOfWork,
    ProducerError, UserUnitOfWork, bootstrap,
};

struct NullProducer;

#[async_trait]
impl EventProducer for NullProducer {
    async fn start(&self) -> Result<(), ProducerError> {
        Ok(())
    }

    async fn stop(&self) -> Result<(), ProducerError> {
        Ok(())
    }

    async fn publish(&self, _event: &Event, _topic: &str) -> Result<(), ProducerError> {
        Ok(())
    }
}

fn create_user_command() -> CreateUser {
    let profile = UserProfile::with_email(Email::new("bench@example.com").unwrap());
    CreateUser::new(profile, Password::new("bench-password").unwrap())
}

fn bench_create_user(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("bus/create_user", |b| {
        b.iter(|| {
            rt.block_on(async {
                let uow = Arc::new(InMemoryUserUnitOfWork::new(InMemoryUserStore::new()));
                let mut bus = bootstrap(uow, Arc::new(NullProducer));
                bus.handle(Message::Command(Command::CreateUser(create_user_command())))
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_create_and_confirm(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("bus/confirm_credentials", |b| {
        b.iter(|| {
            rt.block_on(async {
                let store = InMemoryUserStore::new();
                let factory = InMemoryBusFactory::new(store.clone(), Arc::new(NullProducer));

                let cmd = create_user_command();
                let user = User::register(cmd.profile, &cmd.password);
                let user_id = user.id();
                let seed = InMemoryUserUnitOfWork::new(store);
                seed.begin().await.unwrap();
                seed.users().add(user).await.unwrap();
                seed.commit().await.unwrap();
                seed.harvest_events().await;

                factory
                    .create_bus()
                    .handle(Message::Command(Command::UpdateCredentialsStatus(
                        UpdateCredentialsStatus::new(user_id, CredentialsStatus::Success),
                    )))
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_factory_bus_creation(c: &mut Criterion) {
    let store = InMemoryUserStore::new();
    let factory = InMemoryBusFactory::new(store, Arc::new(NullProducer));

    c.bench_function("bus/factory_create_bus", |b| {
        b.iter(|| {
            let _bus = factory.create_bus();
        });
    });
}

criterion_group!(
    benches,
    bench_create_user,
    bench_create_and_confirm,
    bench_factory_bus_creation
);
criterion_main!(benches);
