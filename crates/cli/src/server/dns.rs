use machine_dns_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

const MAX_DATAGRAM_SIZE: usize = 4096;
const RECV_ERROR_BACKOFF: Duration = Duration::from_millis(100);

/// Bind the DNS listener. Must run inside a tokio runtime.
pub fn bind_udp_socket(bind_addr: &str) -> anyhow::Result<Arc<UdpSocket>> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    let udp_socket = UdpSocket::from_std(std_socket)?;

    info!(bind_address = %udp_socket.local_addr()?, "DNS server listening");
    Ok(Arc::new(udp_socket))
}

/// Receive datagrams until `shutdown` is cancelled. Each datagram is handled
/// in its own task so a slow lookup never holds up the others.
pub async fn run_udp_worker(
    socket: Arc<UdpSocket>,
    handler: Arc<DnsServerHandler>,
    shutdown: CancellationToken,
) {
    let mut recv_buf = [0u8; MAX_DATAGRAM_SIZE];

    loop {
        let received = tokio::select! {
            _ = shutdown.cancelled() => {
                info!("DNS worker stopping");
                break;
            }
            received = socket.recv_from(&mut recv_buf) => received,
        };

        match received {
            Ok((n, from)) => {
                let handler = handler.clone();
                let socket = socket.clone();
                let owned_buf: Arc<[u8]> = Arc::from(&recv_buf[..n]);
                tokio::spawn(async move {
                    if let Some(response) = handler.handle_raw_udp(&owned_buf, from.ip()).await {
                        if let Err(e) = socket.send_to(&response, from).await {
                            debug!(client = %from, error = %e, "Failed to send DNS response");
                        }
                    }
                });
            }
            Err(e) => {
                let Some(backoff) = recv_error_backoff(&e) else {
                    continue;
                };
                error!(error = %e, backoff_ms = backoff.as_millis() as u64, "UDP recv error");
                tokio::select! {
                    _ = shutdown.cancelled() => {
                        info!("DNS worker stopping");
                        break;
                    }
                    _ = tokio::time::sleep(backoff) => {}
                }
            }
        }
    }
}

/// How long to pause before receiving again after `e`. Transient errors
/// retry immediately.
fn recv_error_backoff(e: &io::Error) -> Option<Duration> {
    match e.kind() {
        io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock | io::ErrorKind::ConnectionReset => {
            None
        }
        _ => Some(RECV_ERROR_BACKOFF),
    }
}
