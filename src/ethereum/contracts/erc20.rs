//! ERC20 token contract bindings.

use alloy::sol;

// Read-only subset of the ERC20 interface used for metadata lookups.
sol! {
    #[sol(rpc)]
    interface IERC20 {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
    }
}
