#[actix_web::main]
async fn main() -> std::io::Result<()> {
    specimen_docs_server::run().await
}
