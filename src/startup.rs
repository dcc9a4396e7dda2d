use crate::configuration::Settings;
use crate::domain::ContactEmail;
use crate::email_client::EmailClient;
use crate::routes;
use actix_web::{dev::Server, web, App, HttpServer};
use std::io::ErrorKind;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

/// The address every inquiry notification is delivered to.
pub struct InquiryInbox(pub ContactEmail);

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let sender_email = configuration
            .email_client
            .sender()
            .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;
        let recipient_email = configuration
            .email_client
            .recipient()
            .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;

        let timeout = configuration.email_client.timeout();
        let email_client = EmailClient::new(
            configuration.email_client.base_url,
            sender_email,
            configuration.email_client.authorization_token,
            timeout,
        )
        .map_err(|e| std::io::Error::new(ErrorKind::Other, e))?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );

        let listener = TcpListener::bind(&address)?;
        // Retrieve the port assigned to us by the OS
        let port = listener.local_addr()?.port();
        let server = run(listener, email_client, InquiryInbox(recipient_email))?;

        // We "save" the bound port in one of `Application`'s fields.
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// A more expressive name that makes it clear that this function only returns when the
    /// application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// # Observability
/// `TracingLogger` opens a root span per request, carrying a request id, and closes it with the
/// status code. Every span opened by a handler - and by the email client below it - nests under
/// it, so a single inquiry can be followed end to end in the logs.
pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    inbox: InquiryInbox,
) -> Result<Server, std::io::Error> {
    // Wrap the shared state in a smart pointer
    let email_client = web::Data::new(email_client);
    let inbox = web::Data::new(inbox);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(routes::health_check))
            .route("/contact", web::post().to(routes::submit_inquiry))
            .route("/roi", web::get().to(routes::estimate_roi))
            .app_data(email_client.clone())
            .app_data(inbox.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
