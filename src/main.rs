// src/main.rs

use tokio::net::TcpListener;

use centel_backend::config::{AppState, Config};
use centel_backend::routes;

#[tokio::main]
async fn main() {
    // O .env é opcional: sem DATABASE_URL a aplicação sobe com o store de memória.
    dotenvy::dotenv().ok();

    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    let config = Config::from_env();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new(&config)
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    let app = routes::app(app_state);

    // Inicia o servidor
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 API escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
